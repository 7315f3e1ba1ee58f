//! Static content pages.

use crate::markup::{Markup, View};
use crate::router::Router;

/// Blog index.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blogs;

impl View for Blogs {
    fn title(&self) -> &str {
        "Blogs"
    }

    fn render(&self, _router: &Router) -> Markup {
        Markup::raw("<section><h1>Blogs</h1><p>Nothing here yet.</p></section>")
    }
}

/// Contact page.
#[derive(Debug, Clone, Copy, Default)]
pub struct Contact;

impl View for Contact {
    fn title(&self) -> &str {
        "Contact me"
    }

    fn render(&self, _router: &Router) -> Markup {
        Markup::raw("<section><h1>Contact me</h1><p>Say hi through any of the usual channels.</p></section>")
    }
}
