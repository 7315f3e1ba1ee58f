//! HTTP server for simplemickey.com.
//!
//! Renders pages on request through the site router and serves the stylesheet
//! bundle and public files.

pub mod server;

pub use server::{create_router, DevServer, DevServerConfig, ServerError, ServerState};
