//! Static site build command.

use std::path::PathBuf;

use anyhow::Result;
use mickey_static::{BuildConfig, StaticBuilder};

use crate::config::ConfigFile;

/// Run the build command.
pub async fn run(file_config: ConfigFile, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building static site...");

    let config = BuildConfig {
        output_dir: output.unwrap_or_else(|| PathBuf::from(&file_config.site.output)),
        public_dir: Some(PathBuf::from(&file_config.site.public_dir)),
        minify: minify.unwrap_or(file_config.build.minify),
        site: file_config.site.site,
    };

    let result = StaticBuilder::new(config)?.build().await?;

    tracing::info!(
        "Built {} pages and copied {} public files in {}ms",
        result.pages,
        result.public_files,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
