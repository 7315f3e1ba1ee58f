//! Views, router and invite redirect for simplemickey.com.
//!
//! The site is a handful of static views selected by a small router. The only
//! behavior beyond rendering is the invite redirect on the home page, which
//! moves a CMS invitation fragment onto the `/admin` path.

pub mod link;
pub mod markup;
pub mod navigator;
pub mod redirect;
pub mod router;
pub mod site;
pub mod styles;
pub mod templates;
pub mod views;

pub use link::Link;
pub use markup::{Markup, View};
pub use navigator::{Navigator, NoopNavigator, RecordingNavigator};
pub use redirect::{browser_redirect_script, redirect_on_mount, resolve_invite_redirect};
pub use router::{path_of, Route, Router};
pub use site::{Page, Site, SiteConfig};
pub use styles::ScopedStyles;
pub use templates::{RenderError, TemplateEngine};
pub use views::{Blogs, Contact, Header, Home, NotFound};
