//! Static site builder for simplemickey.com.
//!
//! Renders every route of the site to HTML files, bundles the scoped
//! stylesheets and copies public files next to them.

pub mod assets;
pub mod builder;

pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder};
