//! Home page.

use crate::markup::{Markup, View};
use crate::navigator::Navigator;
use crate::redirect::{browser_redirect_script, redirect_on_mount};
use crate::router::Router;

/// The home page.
///
/// Mounting runs the invite check once. Rendering never runs it again, however
/// many times the mounted page is rendered.
#[derive(Debug, Clone)]
pub struct Home {
    redirected_to: Option<String>,
}

impl Home {
    /// Mount the page for the current location.
    ///
    /// `location` is `None` when the host cannot tell where it is. If the
    /// location is a CMS invitation link, `navigator` is sent to the admin URL.
    pub fn mount(location: Option<&str>, navigator: &mut dyn Navigator) -> Self {
        Self {
            redirected_to: redirect_on_mount(location, navigator),
        }
    }

    /// Where mounting sent the navigator, if anywhere.
    pub fn redirected_to(&self) -> Option<&str> {
        self.redirected_to.as_deref()
    }
}

impl View for Home {
    fn title(&self) -> &str {
        "Home"
    }

    fn render(&self, _router: &Router) -> Markup {
        Markup::raw(format!(
            "<div>It is me</div>\n<script>{}</script>",
            browser_redirect_script()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::RecordingNavigator;

    #[test]
    fn redirects_invite_on_mount() {
        let mut nav = RecordingNavigator::new();

        let home = Home::mount(Some("https://site.test/#invite_token=abc123"), &mut nav);

        assert_eq!(
            home.redirected_to(),
            Some("https://site.test/admin#invite_token=abc123")
        );
        assert_eq!(nav.visits(), ["https://site.test/admin#invite_token=abc123"]);
    }

    #[test]
    fn rerender_does_not_recheck() {
        let mut nav = RecordingNavigator::new();
        let home = Home::mount(Some("https://site.test/#invite_token=abc123"), &mut nav);
        let router = Router::new("/");

        let first = home.render(&router);
        let second = home.render(&router);

        assert_eq!(first, second);
        assert_eq!(nav.visits().len(), 1);
    }

    #[test]
    fn plain_visit_renders_without_navigation() {
        let mut nav = RecordingNavigator::new();

        let home = Home::mount(Some("https://site.test/"), &mut nav);

        assert_eq!(home.redirected_to(), None);
        assert!(nav.visits().is_empty());
        assert!(home.render(&Router::new("/")).as_str().contains("<div>It is me</div>"));
    }

    #[test]
    fn missing_location_is_noop() {
        let mut nav = RecordingNavigator::new();

        let home = Home::mount(None, &mut nav);

        assert_eq!(home.redirected_to(), None);
        assert!(nav.visits().is_empty());
    }

    #[test]
    fn embeds_browser_check() {
        let mut nav = RecordingNavigator::new();
        let home = Home::mount(None, &mut nav);

        let html = home.render(&Router::new("/")).into_string();

        assert!(html.contains("<script>"));
        assert!(html.contains("#invite_token"));
    }
}
