//! Routing table and active-path queries.

use url::Url;

/// A page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    Home,
    /// `/blogs`
    Blogs,
    /// `/contact`
    Contact,
    /// Everything else
    NotFound,
}

impl Route {
    /// Every route, in navigation order.
    pub const ALL: [Route; 4] = [Route::Home, Route::Blogs, Route::Contact, Route::NotFound];

    /// Pick the route for a path. Unknown paths map to [`Route::NotFound`].
    pub fn resolve(path: &str) -> Self {
        match normalize(path) {
            "/" => Route::Home,
            "/blogs" => Route::Blogs,
            "/contact" => Route::Contact,
            _ => Route::NotFound,
        }
    }

    /// Canonical path, or `None` for the catch-all.
    pub fn path(self) -> Option<&'static str> {
        match self {
            Route::Home => Some("/"),
            Route::Blogs => Some("/blogs"),
            Route::Contact => Some("/contact"),
            Route::NotFound => None,
        }
    }

    /// HTTP status a server should answer with.
    pub fn status(self) -> u16 {
        match self {
            Route::NotFound => 404,
            _ => 200,
        }
    }
}

/// Answers "is this link active" for the current path.
#[derive(Debug, Clone)]
pub struct Router {
    current: String,
}

impl Router {
    /// Create a router positioned at `current_path`.
    pub fn new(current_path: impl Into<String>) -> Self {
        Self {
            current: current_path.into(),
        }
    }

    /// The current path.
    pub fn current_path(&self) -> &str {
        &self.current
    }

    /// The route matching the current path.
    pub fn route(&self) -> Route {
        Route::resolve(&self.current)
    }

    /// Whether `href` points at the current path.
    ///
    /// Trailing slashes are ignored. The root is only active on the root itself.
    pub fn is_active(&self, href: &str) -> bool {
        normalize(href) == normalize(&self.current)
    }
}

/// Extract the path from a location.
///
/// Full URLs are parsed; anything else is treated as a path with an optional
/// query or fragment.
pub fn path_of(location: &str) -> String {
    match Url::parse(location) {
        Ok(url) => url.path().to_string(),
        Err(_) => {
            let path = location.split(['?', '#']).next().unwrap_or_default();
            if path.is_empty() {
                "/".to_string()
            } else {
                path.to_string()
            }
        }
    }
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_routing_table() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve("/blogs"), Route::Blogs);
        assert_eq!(Route::resolve("/blogs/"), Route::Blogs);
        assert_eq!(Route::resolve("/contact"), Route::Contact);
        assert_eq!(Route::resolve("/nonexistent-page"), Route::NotFound);
        assert_eq!(Route::resolve("/blogs/first-post"), Route::NotFound);
    }

    #[test]
    fn not_found_has_no_path() {
        assert_eq!(Route::NotFound.path(), None);
        assert_eq!(Route::NotFound.status(), 404);
        assert_eq!(Route::Home.status(), 200);
    }

    #[test]
    fn active_path_matching() {
        let router = Router::new("/blogs/");

        assert!(router.is_active("/blogs"));
        assert!(!router.is_active("/contact"));
        assert!(!router.is_active("/"));
        assert!(Router::new("/").is_active("/"));
    }

    #[test]
    fn extracts_path_from_location() {
        assert_eq!(path_of("https://site.test/#invite_token=tok"), "/");
        assert_eq!(path_of("https://site.test/blogs?page=2"), "/blogs");
        assert_eq!(path_of("/contact#top"), "/contact");
        assert_eq!(path_of("#invite_token=x"), "/");
        assert_eq!(path_of(""), "/");
    }
}
