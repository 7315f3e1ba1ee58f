//! Invite redirect for CMS invitation links.
//!
//! The CMS emails invitation links that land on the site root with the token in
//! the fragment, e.g. `https://example.com/#invite_token=XYZ`. The admin
//! interface that accepts them lives under `/admin`, so the home page moves the
//! fragment there: `https://example.com/admin#invite_token=XYZ`.

use crate::navigator::Navigator;

/// Marker the CMS puts at the start of an invitation fragment.
pub const INVITE_MARKER: &str = "invite_token";

/// Path segment inserted in front of the fragment.
pub const ADMIN_SEGMENT: &str = "admin";

const INVITE_FRAGMENT: &str = "#invite_token";

/// Compute the admin URL for an invitation link.
///
/// Returns `None` unless `location` contains `#invite_token`. The marker outside
/// a fragment does not count. The segment is inserted right before the first
/// `#`, so the fragment is carried over untouched.
pub fn resolve_invite_redirect(location: &str) -> Option<String> {
    if !location.contains(INVITE_FRAGMENT) {
        return None;
    }

    let hash = location.find('#')?;
    let (before, fragment) = location.split_at(hash);

    Some(format!("{}{}{}", before, ADMIN_SEGMENT, fragment))
}

/// Whether the last path segment before the fragment is already `admin`.
///
/// Rewriting such a location again yields a doubled segment
/// (`/adminadmin#...` or `/admin/admin#...`). The rewrite does not guard
/// against it; callers use this to flag the case. Segments are compared whole,
/// so `/sysadmin` is not an admin path.
pub fn is_already_admin(location: &str) -> bool {
    let Some(hash) = location.find('#') else {
        return false;
    };

    let path = &location[..hash];
    let path = path.strip_suffix('/').unwrap_or(path);

    path.rsplit('/').next() == Some(ADMIN_SEGMENT)
}

/// Run the invite check for a freshly mounted view.
///
/// A missing location means the host has no location facility; that is a
/// silent no-op. When the location is an invitation link the navigator is
/// asked to load the admin URL exactly once, and that URL is returned.
pub fn redirect_on_mount(location: Option<&str>, navigator: &mut dyn Navigator) -> Option<String> {
    let Some(location) = location else {
        tracing::debug!("No current location, skipping invite check");
        return None;
    };

    let target = resolve_invite_redirect(location)?;

    if is_already_admin(location) {
        tracing::warn!(
            location,
            admin_url = %target,
            "Invite link already points at the admin path, segment will be doubled"
        );
    }

    tracing::info!(admin_url = %target, "Redirecting invitation link to admin");
    navigator.replace_location(&target);

    Some(target)
}

/// Inline script that applies the same rewrite in a browser.
///
/// Browsers never send the fragment to the server, so server-side rendering
/// cannot see the token. The home page embeds this script to run the check
/// against `window.location` on load. It does nothing when there is no window.
pub fn browser_redirect_script() -> String {
    format!(
        r#"(function() {{
  'use strict';
  if (typeof window === 'undefined' || !window.location) return;
  var href = window.location.href;
  if (href.indexOf('{fragment}') === -1) return;
  var hash = href.indexOf('#');
  window.location.href = href.substring(0, hash) + '{segment}' + href.substring(hash);
}})();"#,
        fragment = INVITE_FRAGMENT,
        segment = ADMIN_SEGMENT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::RecordingNavigator;

    #[test]
    fn rewrites_invite_at_root() {
        assert_eq!(
            resolve_invite_redirect("https://site.test/#invite_token=abc123").as_deref(),
            Some("https://site.test/admin#invite_token=abc123")
        );
    }

    #[test]
    fn rewrites_invite_below_a_path() {
        assert_eq!(
            resolve_invite_redirect("https://site.test/path/#invite_token=xyz").as_deref(),
            Some("https://site.test/path/admin#invite_token=xyz")
        );
    }

    #[test]
    fn ignores_marker_outside_fragment() {
        assert_eq!(resolve_invite_redirect("https://site.test/invite_token"), None);
        assert_eq!(
            resolve_invite_redirect("https://site.test/?invite_token=abc"),
            None
        );
    }

    #[test]
    fn ignores_other_fragments() {
        assert_eq!(resolve_invite_redirect("https://site.test/#about"), None);
        assert_eq!(resolve_invite_redirect("https://site.test/blogs"), None);
        assert_eq!(
            resolve_invite_redirect("https://site.test/#recovery_token=abc"),
            None
        );
    }

    #[test]
    fn splits_at_first_hash() {
        assert_eq!(
            resolve_invite_redirect("https://site.test/#x#invite_token=1").as_deref(),
            Some("https://site.test/admin#x#invite_token=1")
        );
    }

    #[test]
    fn second_application_doubles_the_segment() {
        let once = resolve_invite_redirect("https://site.test/#invite_token=t").unwrap();
        assert!(is_already_admin(&once));

        let twice = resolve_invite_redirect(&once).unwrap();
        assert_eq!(twice, "https://site.test/adminadmin#invite_token=t");
    }

    #[test]
    fn admin_check_compares_whole_segments() {
        assert!(is_already_admin("https://site.test/admin#invite_token=t"));
        assert!(is_already_admin("https://site.test/admin/#invite_token=t"));
        assert!(!is_already_admin("https://site.test/sysadmin#invite_token=t"));
        assert!(!is_already_admin("https://site.test/#invite_token=t"));
        assert!(!is_already_admin("https://site.test/admin"));
    }

    #[test]
    fn trailing_slash_admin_doubles_the_segment() {
        let location = "https://site.test/admin/#invite_token=t";

        assert_eq!(
            resolve_invite_redirect(location).as_deref(),
            Some("https://site.test/admin/admin#invite_token=t")
        );
        assert!(is_already_admin(location));
    }

    #[test]
    fn mount_navigates_once() {
        let mut nav = RecordingNavigator::new();

        let target = redirect_on_mount(Some("https://site.test/#invite_token=tok"), &mut nav);

        assert_eq!(target.as_deref(), Some("https://site.test/admin#invite_token=tok"));
        assert_eq!(nav.visits(), ["https://site.test/admin#invite_token=tok"]);
    }

    #[test]
    fn mount_without_location_is_noop() {
        let mut nav = RecordingNavigator::new();

        assert_eq!(redirect_on_mount(None, &mut nav), None);
        assert!(nav.visits().is_empty());
    }

    #[test]
    fn mount_without_invite_is_noop() {
        let mut nav = RecordingNavigator::new();

        assert_eq!(redirect_on_mount(Some("https://site.test/contact"), &mut nav), None);
        assert!(nav.visits().is_empty());
    }

    #[test]
    fn fragment_is_hash_plus_marker() {
        assert_eq!(INVITE_FRAGMENT, format!("#{}", INVITE_MARKER));
    }

    #[test]
    fn browser_script_uses_marker_and_segment() {
        let script = browser_redirect_script();

        assert!(script.contains("'#invite_token'"));
        assert!(script.contains("'admin'"));
        assert!(script.contains("typeof window === 'undefined'"));
    }
}
