//! Login proxy.
//!
//! The portal does not authenticate anyone itself: the request body is
//! forwarded to the commission's auth service and the upstream status and
//! JSON body are relayed as-is. Only transport-level failures are translated
//! into a generic 500 so upstream internals never leak to the browser.

use std::time::Duration;

use axum::{
    extract::Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use contracts::system::auth::LoginRequest;
use once_cell::sync::Lazy;
use serde_json::json;

use crate::shared::config;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(15))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("upstream returned unmappable status {0}")]
    BadStatus(u16),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "internal server error" })),
        )
            .into_response()
    }
}

/// `POST /api/auth/login`: forward credentials upstream, relay the answer.
pub async fn login(Json(request): Json<LoginRequest>) -> Response {
    match forward_login(&request).await {
        Ok((status, body)) => (status, Json(body)).into_response(),
        Err(err) => {
            tracing::error!("login proxy failed: {err}");
            err.into_response()
        }
    }
}

async fn forward_login(
    request: &LoginRequest,
) -> Result<(StatusCode, serde_json::Value), ProxyError> {
    let url = login_url(&config::get().upstream.auth_api_url);

    let upstream = HTTP_CLIENT.post(&url).json(request).send().await?;

    let status_u16 = upstream.status().as_u16();
    let status =
        StatusCode::from_u16(status_u16).map_err(|_| ProxyError::BadStatus(status_u16))?;

    // Relay the body whether the upstream accepted or rejected the login;
    // the browser distinguishes by status.
    let body = upstream.json::<serde_json::Value>().await?;

    Ok((status, body))
}

fn login_url(base: &str) -> String {
    format!("{}/auth/login", base.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_url_joins_cleanly() {
        assert_eq!(
            login_url("http://127.0.0.1:9000/api"),
            "http://127.0.0.1:9000/api/auth/login"
        );
        assert_eq!(
            login_url("http://127.0.0.1:9000/api/"),
            "http://127.0.0.1:9000/api/auth/login"
        );
    }
}
