//! The host environment's navigation side channel.

/// Performs a full document location replacement.
///
/// Views never touch a global location object. Whatever hosts them (a test, the
/// server, the CLI) hands in a navigator and decides what a navigation means.
pub trait Navigator {
    /// Replace the current document location with `url`.
    fn replace_location(&mut self, url: &str);
}

impl<F> Navigator for F
where
    F: FnMut(&str),
{
    fn replace_location(&mut self, url: &str) {
        self(url)
    }
}

/// Navigator that discards every navigation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn replace_location(&mut self, url: &str) {
        tracing::trace!(url, "Discarding navigation");
    }
}

/// Navigator that remembers every location it was asked to load.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visits: Vec<String>,
}

impl RecordingNavigator {
    /// Create a navigator with no recorded visits.
    pub fn new() -> Self {
        Self::default()
    }

    /// All navigations in the order they were requested.
    pub fn visits(&self) -> &[String] {
        &self.visits
    }

    /// The most recent navigation, if any.
    pub fn current(&self) -> Option<&str> {
        self.visits.last().map(String::as_str)
    }
}

impl Navigator for RecordingNavigator {
    fn replace_location(&mut self, url: &str) {
        self.visits.push(url.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_navigations_in_order() {
        let mut nav = RecordingNavigator::new();
        nav.replace_location("https://a.test/one");
        nav.replace_location("https://a.test/two");

        assert_eq!(nav.visits().len(), 2);
        assert_eq!(nav.current(), Some("https://a.test/two"));
    }

    #[test]
    fn closures_are_navigators() {
        let mut seen = Vec::new();
        {
            let mut nav = |url: &str| seen.push(url.to_string());
            nav.replace_location("https://a.test/admin");
        }

        assert_eq!(seen, vec!["https://a.test/admin".to_string()]);
    }
}
