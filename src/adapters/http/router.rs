//! Application router builder.
//!
//! Shared by the binary and the integration tests so both run the same
//! middleware stack.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::{middleware, routing::get, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::assistant::{assistant_routes, health, AssistantHandlers};
use super::middleware::{auth_middleware, AuthState};
use crate::config::ServerConfig;

/// Builds the full application router.
///
/// Layers, innermost first: timeout, request-id propagation, tracing,
/// request-id assignment, CORS. Authentication wraps only the assistant
/// routes; `/v1/health` is public.
pub fn build_app_router(
    handlers: AssistantHandlers,
    validator: AuthState,
    config: &ServerConfig,
) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    let assistant = assistant_routes(handlers)
        .layer(middleware::from_fn_with_state(validator, auth_middleware));

    Router::new()
        .route("/v1/health", get(health))
        .nest("/v1/ai/project", assistant)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(build_cors_layer(config))
}

/// CORS from the configured origins; any origin when none are configured.
///
/// Unparseable origins are skipped with a warning. `AppConfig::validate`
/// rejects them before the server starts.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .max_age(Duration::from_secs(3600))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::{
        ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_METHOD, ORIGIN,
    };
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app(config: &ServerConfig) -> Router {
        Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(build_cors_layer(config))
    }

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/ping")
            .header(ORIGIN, origin)
            .header(ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap()
    }

    fn configured() -> ServerConfig {
        ServerConfig {
            cors_origins: Some("http://localhost:5173, https://app.example.com".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn preflight_from_configured_origin_is_allowed() {
        let response = app(&configured())
            .oneshot(preflight("https://app.example.com"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "https://app.example.com"
        );
    }

    #[tokio::test]
    async fn preflight_from_unlisted_origin_gets_no_allow_header() {
        let response = app(&configured())
            .oneshot(preflight("https://evil.example.org"))
            .await
            .unwrap();

        assert!(response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }

    #[tokio::test]
    async fn no_configured_origins_allows_any() {
        let response = app(&ServerConfig::default())
            .oneshot(preflight("https://anywhere.example.net"))
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn invalid_origin_is_skipped_and_valid_ones_kept() {
        let config = ServerConfig {
            cors_origins: Some("http://bad\nhost, http://localhost:5173".to_string()),
            ..Default::default()
        };

        let response = app(&config)
            .oneshot(preflight("http://localhost:5173"))
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
    }
}
