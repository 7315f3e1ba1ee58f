//! Server implementation.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use mickey_views::{styles, NoopNavigator, Site, SiteConfig};

/// Configuration for the server.
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// Directory of static files served under `/public`
    pub public_dir: PathBuf,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,

    /// Site title and base URL
    pub site: SiteConfig,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("public"),
            port: 7777,
            host: "127.0.0.1".to_string(),
            open: true,
            site: SiteConfig::default(),
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address {0}")]
    InvalidAddress(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("Failed to set up site: {0}")]
    SiteError(String),
}

/// Shared server state.
pub struct ServerState {
    site: Site,
    css: String,
}

impl ServerState {
    /// Create the state for a site.
    pub fn new(config: SiteConfig) -> Result<Self, ServerError> {
        let site = Site::new(config).map_err(|e| ServerError::SiteError(e.to_string()))?;

        Ok(Self {
            site,
            css: styles::bundle(),
        })
    }
}

/// Build the router serving the site.
///
/// Every path that is not an asset goes through the site router, so unknown
/// paths get the 404 page.
pub fn create_router(state: Arc<ServerState>, public_dir: &Path) -> Router {
    Router::new()
        .route("/assets/main.css", get(css_handler))
        .nest_service("/public", ServeDir::new(public_dir))
        .fallback(page_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Server for the site.
pub struct DevServer {
    config: DevServerConfig,
}

impl DevServer {
    /// Create a new server.
    pub fn new(config: DevServerConfig) -> Self {
        Self { config }
    }

    /// Start serving until Ctrl+C.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr_str = format!("{}:{}", self.config.host, self.config.port);
        let addr: SocketAddr = addr_str
            .parse()
            .map_err(|_| ServerError::InvalidAddress(addr_str.clone()))?;

        let state = Arc::new(ServerState::new(self.config.site.clone())?);
        let app = create_router(state, &self.config.public_dir);

        tracing::info!("Starting server at http://{}", addr);

        if self.config.open {
            let url = format!("http://{}", addr);
            let _ = open::that(&url);
        }

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

/// Render the page for the request path.
///
/// Request URIs never carry a fragment, so the home page's invite check cannot
/// fire here. The page's inline script runs it in the browser instead.
async fn page_handler(State(state): State<Arc<ServerState>>, uri: Uri) -> Response {
    let page = state.site.mount(&uri.to_string(), &mut NoopNavigator);

    let status = StatusCode::from_u16(page.status()).unwrap_or(StatusCode::OK);

    match state.site.render_document(&page) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render {}: {}", page.path, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

/// Serve the stylesheet bundle.
async fn css_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        state.css.clone(),
    )
}
