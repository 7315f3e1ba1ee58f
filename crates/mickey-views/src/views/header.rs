//! Site header with navigation.

use crate::link::Link;
use crate::markup::{Markup, View};
use crate::router::Router;
use crate::styles;

/// Logo text shown in the header.
pub const LOGO: &str = "simplemickey.com";

/// Header with the logo and the main navigation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Header;

impl Header {
    /// Navigation links, in display order.
    pub fn nav_links() -> Vec<Link> {
        let active = styles::header().class("active");
        vec![
            Link::new("/blogs", "Blogs").active_class(active),
            Link::new("/contact", "Contact me").active_class(active),
        ]
    }
}

impl View for Header {
    fn title(&self) -> &str {
        LOGO
    }

    fn render(&self, router: &Router) -> Markup {
        let styles = styles::header();
        let logo = Link::new("/", LOGO).class(styles.class("header__logo"));

        let nav: String = Self::nav_links()
            .iter()
            .map(|link| link.render(router).into_string())
            .collect();

        Markup::raw(format!(
            r#"<header class="{}">{}<nav class="{}">{}</nav></header>"#,
            styles.class("header"),
            logo.render(router),
            styles.class("header__menu"),
            nav
        ))
    }
}
