//! Views of the site.

pub mod header;
pub mod home;
pub mod not_found;
pub mod pages;

pub use header::Header;
pub use home::Home;
pub use not_found::NotFound;
pub use pages::{Blogs, Contact};
