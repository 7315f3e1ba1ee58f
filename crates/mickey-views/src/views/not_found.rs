//! 404 page.

use crate::link::Link;
use crate::markup::{Markup, View};
use crate::router::Router;
use crate::styles;

/// Page shown for unknown paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotFound;

impl View for NotFound {
    fn title(&self) -> &str {
        "Not Found"
    }

    fn render(&self, router: &Router) -> Markup {
        let home = Link::new("/", Markup::raw("<h4>Back to Home</h4>"));

        Markup::raw(format!(
            r#"<div class="{}"><h1>Error 404</h1><p>That page doesn&#39;t exist.</p>{}</div>"#,
            styles::not_found().class("notfound"),
            home.render(router)
        ))
    }
}
