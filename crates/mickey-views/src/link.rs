//! Router-aware anchor links.

use crate::markup::{escape, Markup};
use crate::router::Router;

/// A link to a path on the site.
///
/// When an active class is set and the router reports the link's path as the
/// current one, the class is added to the anchor.
#[derive(Debug, Clone)]
pub struct Link {
    /// Destination path
    href: String,
    /// Link content
    content: Markup,
    /// Class always applied
    class: Option<String>,
    /// Class applied while the link is active
    active_class: Option<String>,
}

impl Link {
    /// Create a link.
    pub fn new(href: impl Into<String>, content: impl Into<Markup>) -> Self {
        Self {
            href: href.into(),
            content: content.into(),
            class: None,
            active_class: None,
        }
    }

    /// Set the class always applied to the anchor.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set the class applied while the link points at the current path.
    pub fn active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = Some(class.into());
        self
    }

    /// Destination path.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Render the anchor for the given router state.
    pub fn render(&self, router: &Router) -> Markup {
        let mut classes: Vec<&str> = Vec::new();
        if let Some(class) = &self.class {
            classes.push(class);
        }
        if let Some(active) = &self.active_class {
            if router.is_active(&self.href) {
                classes.push(active);
            }
        }

        let class_attr = if classes.is_empty() {
            String::new()
        } else {
            format!(r#" class="{}""#, escape(&classes.join(" ")))
        };

        Markup::raw(format!(
            r#"<a href="{}"{}>{}</a>"#,
            escape(&self.href),
            class_attr,
            self.content
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_plain_link() {
        let link = Link::new("/", "Home");

        assert_eq!(
            link.render(&Router::new("/blogs")).as_str(),
            r#"<a href="/">Home</a>"#
        );
    }

    #[test]
    fn adds_active_class_on_current_path() {
        let link = Link::new("/blogs", "Blogs").active_class("active");

        assert_eq!(
            link.render(&Router::new("/blogs")).as_str(),
            r#"<a href="/blogs" class="active">Blogs</a>"#
        );
        assert_eq!(
            link.render(&Router::new("/contact")).as_str(),
            r#"<a href="/blogs">Blogs</a>"#
        );
    }

    #[test]
    fn combines_classes() {
        let link = Link::new("/contact", "Contact")
            .class("menu")
            .active_class("active");

        assert_eq!(
            link.render(&Router::new("/contact/")).as_str(),
            r#"<a href="/contact" class="menu active">Contact</a>"#
        );
    }

    #[test]
    fn keeps_raw_content() {
        let link = Link::new("/", Markup::raw("<h4>Back to Home</h4>"));

        assert!(link
            .render(&Router::new("/missing"))
            .as_str()
            .contains("<h4>Back to Home</h4>"));
    }
}
