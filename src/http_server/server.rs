//! # HTTP Server
//!
//! Local stand-in for the managed gateway: the coffee routes, a health
//! check, and CORS preflight handling.

use std::io;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::{log_event, log_event_with_fields, Event, Logger};
use crate::table::SharedStore;

use super::coffee_routes::coffee_routes;
use super::config::HttpServerConfig;
use super::health_routes::health_routes;

/// HTTP server for the coffee API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration
    pub fn new(store: SharedStore) -> Self {
        Self::with_config(HttpServerConfig::default(), store)
    }

    /// Create a server with custom configuration
    pub fn with_config(config: HttpServerConfig, store: SharedStore) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router
    fn build_router(config: &HttpServerConfig, store: SharedStore) -> Router {
        Router::new()
            .merge(health_routes())
            .merge(coffee_routes(store))
            .layer(cors_layer(config))
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl-C
    pub async fn start(self) -> Result<(), io::Error> {
        let listener = TcpListener::bind(self.config.bind_addr()).await?;
        let addr = listener.local_addr()?.to_string();
        log_event_with_fields(Event::ServerListening, &[("addr", addr.as_str())]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ServerStopped);
        Ok(())
    }
}

/// Preflight answers for the configured origins, `content-type`, and the
/// five methods the gateway exposes.
///
/// A config that was never validated may still carry a bad origin; then
/// no origin is allowed.
fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    match config.allowed_origins() {
        Ok(None) => cors.allow_origin(Any),
        Ok(Some(origins)) => cors.allow_origin(AllowOrigin::list(origins)),
        Err(e) => {
            let reason = e.to_string();
            Logger::warn("CORS_ORIGINS_REJECTED", &[("reason", reason.as_str())]);
            cors.allow_origin(AllowOrigin::list(Vec::<HeaderValue>::new()))
        }
    }
}

async fn shutdown_signal() {
    // If the handler cannot be installed, serve until killed
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::MemoryStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn store() -> SharedStore {
        Arc::new(MemoryStore::new())
    }

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/coffee")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_is_routed() {
        let router = HttpServer::new(store()).router();

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_empty_origin_list_allows_any() {
        let config = HttpServerConfig {
            cors_origins: Vec::new(),
            ..Default::default()
        };
        let router = HttpServer::with_config(config, store()).router();

        let request = preflight("http://anywhere.example");
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn test_bad_origin_allows_none() {
        let config = HttpServerConfig {
            cors_origins: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:5173/".to_string(),
            ],
            ..Default::default()
        };
        let router = HttpServer::with_config(config, store()).router();

        let request = preflight("http://localhost:5173");
        let response = router.oneshot(request).await.unwrap();

        assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}
