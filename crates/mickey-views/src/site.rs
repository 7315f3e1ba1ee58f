//! Composition of header, router and views into pages.

use serde::Deserialize;

use crate::markup::{Markup, View};
use crate::navigator::Navigator;
use crate::router::{path_of, Route, Router};
use crate::templates::{RenderError, TemplateEngine};
use crate::views::{Blogs, Contact, Header, Home, NotFound};

/// Site-wide settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Site title
    #[serde(default = "default_title")]
    pub title: String,

    /// Base URL the site is served under
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_title() -> String {
    "simplemickey.com".to_string()
}

fn default_base_url() -> String {
    "/".to_string()
}

impl SiteConfig {
    /// Base URL with exactly one trailing slash, so paths can be appended.
    pub fn normalized_base_url(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            base_url: default_base_url(),
        }
    }
}

/// A mounted page.
#[derive(Debug, Clone)]
pub struct Page {
    /// Route that was selected
    pub route: Route,
    /// Path the route was selected for
    pub path: String,
    /// Document title
    pub title: String,
    /// Rendered header
    pub header: Markup,
    /// Rendered view
    pub body: Markup,
    /// Navigation triggered while mounting
    pub redirected_to: Option<String>,
}

impl Page {
    /// HTTP status for this page.
    pub fn status(&self) -> u16 {
        self.route.status()
    }
}

/// The site: picks a view for a location and renders it into a document.
pub struct Site {
    config: SiteConfig,
    templates: TemplateEngine,
}

impl Site {
    /// Create the site.
    pub fn new(mut config: SiteConfig) -> Result<Self, RenderError> {
        config.base_url = config.normalized_base_url();

        Ok(Self {
            config,
            templates: TemplateEngine::new()?,
        })
    }

    /// Site settings.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Mount the view for `location`.
    ///
    /// `location` is a full URL or a path. The home view receives it unchanged
    /// together with `navigator`, so an invitation link is redirected during
    /// the mount.
    pub fn mount(&self, location: &str, navigator: &mut dyn Navigator) -> Page {
        let path = path_of(location);
        let router = Router::new(path.as_str());
        let route = router.route();

        tracing::debug!(location, ?route, "Mounting page");

        let (title, body, redirected_to) = match route {
            Route::Home => {
                let home = Home::mount(Some(location), navigator);
                let redirected_to = home.redirected_to().map(str::to_string);
                (home.title().to_string(), home.render(&router), redirected_to)
            }
            Route::Blogs => rendered(&Blogs, &router),
            Route::Contact => rendered(&Contact, &router),
            Route::NotFound => rendered(&NotFound, &router),
        };

        Page {
            route,
            path,
            title,
            header: Header.render(&router),
            body,
            redirected_to,
        }
    }

    /// Render a mounted page into a full HTML document.
    pub fn render_document(&self, page: &Page) -> Result<String, RenderError> {
        let title = match page.route {
            Route::Home => self.config.title.as_str(),
            _ => page.title.as_str(),
        };

        self.templates.render_document(
            title,
            &self.config.title,
            &self.config.base_url,
            page.header.as_str(),
            page.body.as_str(),
        )
    }
}

fn rendered(view: &dyn View, router: &Router) -> (String, Markup, Option<String>) {
    (view.title().to_string(), view.render(router), None)
}
