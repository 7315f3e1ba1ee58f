//! Live server command.

use std::path::PathBuf;

use anyhow::Result;
use mickey_server::{DevServer, DevServerConfig};

use crate::config::ConfigFile;

/// Run the live server.
pub async fn run(file_config: ConfigFile, port: Option<u16>, open: bool) -> Result<()> {
    let port = port.unwrap_or(file_config.server.port);
    tracing::info!("Starting server on port {}", port);

    let config = DevServerConfig {
        public_dir: PathBuf::from(&file_config.site.public_dir),
        port,
        host: file_config.server.host,
        open,
        site: file_config.site.site,
    };

    DevServer::new(config).start().await?;

    Ok(())
}
