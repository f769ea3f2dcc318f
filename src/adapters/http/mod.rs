//! HTTP surface: axum routers, handlers, and DTOs.

pub mod flow;
pub mod store;

use axum::routing::get;
use axum::Router;
use http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

pub use flow::AppState;

/// Assembles the full API router.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(flow::flow_router().with_state(state))
        .merge(store::store_router())
        .route("/health", get(health))
}

/// Builds the CORS layer from the configured origin list.
///
/// With no configured origins every origin is allowed; otherwise only the
/// listed origins are. Entries that are not valid header values are skipped.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// GET /health - liveness probe.
async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::ServiceExt;

    fn cors_app(allowed_origins: &[String]) -> Router {
        Router::new()
            .route("/health", get(health))
            .layer(cors_layer(allowed_origins))
    }

    fn get_with_origin(origin: &str) -> Request<Body> {
        Request::builder()
            .uri("/health")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn no_configured_origins_allows_any_origin() {
        let app = cors_app(&[]);
        let response = app
            .oneshot(get_with_origin("http://anywhere.example"))
            .await
            .unwrap();

        let allow = response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .expect("allow-origin header present");
        assert_eq!(allow, "*");
    }

    #[tokio::test]
    async fn configured_origin_is_echoed_back() {
        let origins = vec!["http://localhost:5173".to_string()];
        let app = cors_app(&origins);
        let response = app
            .oneshot(get_with_origin("http://localhost:5173"))
            .await
            .unwrap();

        let allow = response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .expect("allow-origin header present");
        assert_eq!(allow, "http://localhost:5173");
    }

    #[tokio::test]
    async fn unlisted_origin_gets_no_allow_header() {
        let origins = vec!["http://localhost:5173".to_string()];
        let app = cors_app(&origins);
        let response = app
            .oneshot(get_with_origin("http://evil.example"))
            .await
            .unwrap();

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}
