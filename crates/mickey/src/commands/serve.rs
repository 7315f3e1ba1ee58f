//! Preview a built site.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::config::ConfigFile;

/// Router serving `dir`, answering unknown paths with its `404.html`.
fn preview_router(dir: &Path) -> Router {
    let not_found = ServeFile::new(dir.join("404.html"));
    Router::new().fallback_service(ServeDir::new(dir).not_found_service(not_found))
}

/// Run the serve command.
pub async fn run(file_config: ConfigFile, port: u16, dir: Option<PathBuf>, open: bool) -> Result<()> {
    let dir = dir.unwrap_or_else(|| PathBuf::from(&file_config.site.output));

    if !mickey_static::builder::is_built(&dir) {
        anyhow::bail!(
            "No built site in {}. Run 'mickey build' first.",
            dir.display()
        );
    }

    let addr: SocketAddr = format!("{}:{}", file_config.server.host, port)
        .parse()
        .with_context(|| format!("Invalid host {}", file_config.server.host))?;

    tracing::info!("Previewing {} at http://{}", dir.display(), addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    if open {
        let url = format!("http://{}", addr);
        if let Err(e) = open::that(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    axum::serve(listener, preview_router(&dir)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::fs;
    use tempfile::tempdir;
    use tower::ServiceExt;

    #[tokio::test]
    async fn refuses_unbuilt_directory() {
        let temp = tempdir().unwrap();

        let err = run(ConfigFile::default(), 0, Some(temp.path().to_path_buf()), false)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("mickey build"));
    }

    #[tokio::test]
    async fn rejects_invalid_configured_host() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("index.html"), "home").unwrap();

        let mut config = ConfigFile::default();
        config.server.host = "not a host".to_string();

        let err = run(config, 0, Some(temp.path().to_path_buf()), false)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Invalid host not a host"));
    }

    #[tokio::test]
    async fn unknown_paths_get_the_built_404_page() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("index.html"), "home").unwrap();
        fs::write(temp.path().join("404.html"), "missing").unwrap();

        let res = preview_router(temp.path())
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
