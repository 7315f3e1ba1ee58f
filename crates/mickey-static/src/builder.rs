//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use url::Url;
use walkdir::WalkDir;

use mickey_views::{RecordingNavigator, Route, Site, SiteConfig};

use crate::assets::AssetPipeline;

/// Configuration for building the static site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Output directory
    pub output_dir: PathBuf,

    /// Directory of files copied verbatim into the output
    pub public_dir: Option<PathBuf>,

    /// Minify CSS output
    pub minify: bool,

    /// Site title and base URL
    pub site: SiteConfig,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            public_dir: None,
            minify: true,
            site: SiteConfig::default(),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated
    pub pages: usize,

    /// Number of public files copied
    pub public_files: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read {0}")]
    ReadError(String),

    #[error("Failed to render {path}: {message}")]
    RenderError { path: String, message: String },

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
    site: Site,
}

impl StaticBuilder {
    /// Create a new static builder.
    pub fn new(config: BuildConfig) -> Result<Self, BuildError> {
        let site = Site::new(config.site.clone()).map_err(|e| BuildError::RenderError {
            path: "base.html".to_string(),
            message: e.to_string(),
        })?;

        Ok(Self { config, site })
    }

    /// Build the static site.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let results: Vec<Result<(), BuildError>> = Route::ALL
            .par_iter()
            .map(|route| self.build_page(*route))
            .collect();

        for result in results {
            result?;
        }

        self.generate_assets()?;
        let public_files = self.copy_public()?;
        self.generate_sitemap()?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages: Route::ALL.len(),
            public_files,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Output file for a route.
    fn output_path(&self, route: Route) -> PathBuf {
        match route.path() {
            Some("/") => self.config.output_dir.join("index.html"),
            Some(path) => self
                .config
                .output_dir
                .join(path.trim_start_matches('/'))
                .join("index.html"),
            None => self.config.output_dir.join("404.html"),
        }
    }

    /// Render a single route.
    fn build_page(&self, route: Route) -> Result<(), BuildError> {
        let location = route.path().unwrap_or("/404");
        let mut navigator = RecordingNavigator::new();

        let page = self.site.mount(location, &mut navigator);
        if let Some(target) = navigator.current() {
            tracing::warn!("Mounting {} navigated to {} during build", location, target);
        }

        let html = self
            .site
            .render_document(&page)
            .map_err(|e| BuildError::RenderError {
                path: location.to_string(),
                message: e.to_string(),
            })?;

        let output_path = self.output_path(route);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
        }

        fs::write(&output_path, html).map_err(|e| BuildError::WriteError(e.to_string()))?;
        tracing::debug!("Wrote {}", output_path.display());

        Ok(())
    }

    /// Generate static assets.
    fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or_else(|e| {
                tracing::warn!("Shipping unminified CSS: {}", e);
                css
            })
        } else {
            css
        };

        fs::write(assets_dir.join("main.css"), css)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Copy the public directory into the output, keeping its layout.
    fn copy_public(&self) -> Result<usize, BuildError> {
        let Some(public_dir) = &self.config.public_dir else {
            return Ok(0);
        };

        if !public_dir.exists() {
            tracing::warn!("Public directory not found: {}", public_dir.display());
            return Ok(0);
        }

        let mut copied = 0;

        for entry in WalkDir::new(public_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(public_dir).unwrap_or(path);
            let target = self.config.output_dir.join(relative);

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
            }

            fs::copy(path, &target)
                .map_err(|e| BuildError::ReadError(format!("{}: {}", path.display(), e)))?;
            copied += 1;
        }

        tracing::info!("Copied {} public files from {}", copied, public_dir.display());

        Ok(copied)
    }

    /// Generate sitemap and robots.txt.
    ///
    /// Sitemaps must list absolute URLs, so both files are skipped unless the
    /// base URL is an absolute http(s) URL. Returns whether they were written.
    fn generate_sitemap(&self) -> Result<bool, BuildError> {
        let base_url = &self.config.site.base_url;
        let site_url = match Url::parse(base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => url,
            _ => {
                tracing::info!(
                    "Skipping sitemap.xml and robots.txt: base URL {} is not absolute",
                    base_url
                );
                return Ok(false);
            }
        };

        let base = base_url.trim_end_matches('/');

        let urls: Vec<String> = Route::ALL
            .iter()
            .filter_map(|route| route.path())
            .map(|path| format!("  <url>\n    <loc>{}{}</loc>\n  </url>", base, path))
            .collect();

        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>"#,
            urls.join("\n")
        );

        fs::write(self.config.output_dir.join("sitemap.xml"), sitemap)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let admin_path = format!("{}/admin", site_url.path().trim_end_matches('/'));
        let robots = format!(
            "User-agent: *\nAllow: /\nDisallow: {}\nSitemap: {}/sitemap.xml",
            admin_path, base
        );
        fs::write(self.config.output_dir.join("robots.txt"), robots)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(true)
    }
}

/// Whether `dir` looks like a finished build.
pub fn is_built(dir: &Path) -> bool {
    dir.join("index.html").exists()
}
