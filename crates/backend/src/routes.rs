use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::system;

/// Application route configuration.
///
/// Everything that is not an API route falls through to the built frontend
/// bundle in `dist`. The auth gate runs inside the request logger so
/// redirects show up in the log too.
pub fn create_router() -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/auth/login", post(system::handlers::auth::login))
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(system::auth::gate::auth_gate))
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn authed_get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header(header::COOKIE, "auth_token=tok-test")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn health_is_open() {
        let response = create_router().oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unauthenticated_page_redirects_to_login() {
        let response = create_router()
            .oneshot(get_request("/permits/applications"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response.headers().get(header::LOCATION).unwrap();
        assert_eq!(location, "/login?redirect=%2Fpermits%2Fapplications");
    }

    #[tokio::test]
    async fn redirect_preserves_query() {
        let response = create_router()
            .oneshot(get_request("/reports?status=published"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response.headers().get(header::LOCATION).unwrap();
        assert_eq!(
            location,
            "/login?redirect=%2Freports%3Fstatus%3Dpublished"
        );
    }

    #[tokio::test]
    async fn authenticated_user_is_sent_away_from_login() {
        let response = create_router()
            .oneshot(authed_get_request("/login"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
    }

    #[tokio::test]
    async fn authenticated_page_request_passes_the_gate() {
        let response = create_router()
            .oneshot(authed_get_request("/permits/applications"))
            .await
            .unwrap();
        // Gate lets it through to the static fallback; no redirect involved.
        assert_ne!(response.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn api_without_token_gets_401() {
        let response = create_router()
            .oneshot(get_request("/api/permits"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn login_proxy_maps_transport_failure_to_generic_500() {
        // Default upstream config points at a port nothing listens on.
        let request = Request::builder()
            .method("POST")
            .uri("/api/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"username":"u","password":"p"}"#))
            .unwrap();

        let response = create_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "internal server error");
    }
}
