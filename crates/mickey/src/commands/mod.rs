pub mod build;
pub mod dev;
pub mod resolve;
pub mod serve;
