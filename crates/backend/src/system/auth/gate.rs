//! Auth gate for everything the server hands out.
//!
//! This is a presence check, not a session validator: the upstream auth
//! service owns token semantics, the gate only decides whether a request may
//! reach a protected path at all. Unauthenticated page navigations are sent
//! to `/login` with the original location preserved in a `redirect` query
//! parameter; unauthenticated API calls get a 401 so fetch() callers fail
//! fast instead of receiving the login page HTML.

use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

const AUTH_COOKIE: &str = "auth_token";

/// Prefixes served without any gating (bundle, assets, health probe).
const BYPASS_PREFIXES: &[&str] = &["/static/", "/pkg/", "/assets/"];
const BYPASS_EXACT: &[&str] = &["/favicon.ico", "/health"];

/// Paths reachable without a token.
const PUBLIC_PATHS: &[&str] = &["/login", "/api/auth/login"];

pub fn is_bypassed(path: &str) -> bool {
    BYPASS_EXACT.contains(&path) || BYPASS_PREFIXES.iter().any(|p| path.starts_with(p))
}

pub fn is_public(path: &str) -> bool {
    PUBLIC_PATHS
        .iter()
        .any(|p| path == *p || path.strip_prefix(p).is_some_and(|r| r.starts_with('/')))
}

/// Token presence: `auth_token` cookie or a non-empty `Authorization: Bearer`.
pub fn has_token(headers: &HeaderMap) -> bool {
    if let Some(cookies) = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()) {
        let found = cookies.split(';').any(|pair| {
            let mut parts = pair.trim().splitn(2, '=');
            parts.next() == Some(AUTH_COOKIE)
                && parts.next().map(|v| !v.is_empty()).unwrap_or(false)
        });
        if found {
            return true;
        }
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|token| !token.trim().is_empty())
        .unwrap_or(false)
}

pub async fn auth_gate(req: Request<Body>, next: Next) -> Response {
    let path = req.uri().path().to_string();

    if is_bypassed(&path) {
        return next.run(req).await;
    }

    let authenticated = has_token(req.headers());

    if is_public(&path) {
        // Logged-in users have no business on the login page
        if authenticated && path == "/login" {
            return redirect("/");
        }
        return next.run(req).await;
    }

    if authenticated {
        return next.run(req).await;
    }

    if path.starts_with("/api/") {
        return unauthorized();
    }

    let target = match req.uri().query() {
        Some(query) => format!("{}?{}", path, query),
        None => path,
    };
    redirect(&format!("/login?redirect={}", urlencoding::encode(&target)))
}

fn redirect(location: &str) -> Response {
    Response::builder()
        .status(StatusCode::SEE_OTHER)
        .header(header::LOCATION, location)
        .body(Body::empty())
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

fn unauthorized() -> Response {
    Response::builder()
        .status(StatusCode::UNAUTHORIZED)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"message":"authentication required"}"#))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bypass_classification() {
        assert!(is_bypassed("/health"));
        assert!(is_bypassed("/favicon.ico"));
        assert!(is_bypassed("/static/themes/dark.css"));
        assert!(is_bypassed("/pkg/frontend_bg.wasm"));
        assert!(!is_bypassed("/permits/applications"));
        assert!(!is_bypassed("/staticx"));
    }

    #[test]
    fn public_classification() {
        assert!(is_public("/login"));
        assert!(is_public("/api/auth/login"));
        assert!(!is_public("/loginx"));
        assert!(!is_public("/api/auth"));
        assert!(!is_public("/"));
    }

    #[test]
    fn token_from_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; auth_token=abc123"),
        );
        assert!(has_token(&headers));
    }

    #[test]
    fn empty_cookie_value_does_not_count() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("auth_token="));
        assert!(!has_token(&headers));
    }

    #[test]
    fn token_from_bearer_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer tok-1"),
        );
        assert!(has_token(&headers));

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert!(!has_token(&headers));
    }

    #[test]
    fn no_headers_no_token() {
        assert!(!has_token(&HeaderMap::new()));
    }
}
