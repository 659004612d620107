//! Server assembly and lifecycle.

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use vitrine_contact::ContactLog;
use vitrine_content::ContentStore;

use crate::config::ServerConfig;
use crate::error::Result;
use crate::routes::{self, AppState};

/// Vitrine HTTP server.
///
/// Wraps the API router with the static asset services and runs it on a
/// tokio TCP listener. The server holds no request state of its own; all
/// shared state lives in [`AppState`].
pub struct Server {
    config: ServerConfig,
}

impl Server {
    /// Creates a server from configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// The server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Builds the application state from the configured paths.
    pub fn state(&self) -> AppState {
        AppState::new(
            ContentStore::new(&self.config.data_dir),
            ContactLog::new(&self.config.contact_log),
        )
    }

    /// Builds the full application router: API routes plus static services
    /// for the site root (`/`), assets (`/assets`), and content documents
    /// (`/data`).
    pub fn router(&self, state: AppState) -> Router {
        routes::api_router(state)
            .nest_service("/assets", ServeDir::new(&self.config.assets_dir))
            .nest_service("/data", ServeDir::new(&self.config.data_dir))
            .fallback_service(ServeDir::new(&self.config.site_root))
            .layer(TraceLayer::new_for_http())
    }

    /// Binds the configured address and serves until shutdown.
    pub async fn run(&self) -> Result<()> {
        let app = self.router(self.state());
        let listener = tokio::net::TcpListener::bind(self.config.bind_addr()).await?;
        tracing::info!(
            addr = %listener.local_addr()?,
            site_root = %self.config.site_root.display(),
            data_dir = %self.config.data_dir.display(),
            "vitrine server listening"
        );
        axum::serve(listener, app).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn server_over(dir: &std::path::Path) -> Server {
        Server::new(ServerConfig {
            port: 0,
            site_root: dir.join("public"),
            assets_dir: dir.join("assets"),
            data_dir: dir.join("data"),
            contact_log: dir.join("uploads").join("messages.json"),
        })
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_site_root_served_at_slash() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("public")).unwrap();
        std::fs::write(dir.path().join("public").join("index.html"), "<html>hi</html>").unwrap();

        let server = server_over(dir.path());
        let (status, body) = get(server.router(server.state()), "/index.html").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"<html>hi</html>");
    }

    #[tokio::test]
    async fn test_data_directory_served_at_data() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("data")).unwrap();
        std::fs::write(dir.path().join("data").join("about.json"), r#"{"summary":"s"}"#).unwrap();

        let server = server_over(dir.path());
        let (status, body) = get(server.router(server.state()), "/data/about.json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, br#"{"summary":"s"}"#);
    }

    #[tokio::test]
    async fn test_api_routes_take_precedence_over_static() {
        let dir = tempfile::tempdir().unwrap();
        let server = server_over(dir.path());

        let (status, _) = get(server.router(server.state()), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_path_is_404_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("public")).unwrap();
        let server = server_over(dir.path());

        let (status, _) = get(server.router(server.state()), "/nope.html").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
