//! API utilities for frontend-backend communication.
//!
//! The backend serves the compiled bundle itself, so API calls are
//! same-origin and a path is already a full URL. Kept as a helper so the
//! call sites stay uniform if a dev-server split ever comes back.

/// Build a full API URL from a path (should start with "/api/").
pub fn api_url(path: &str) -> String {
    path.to_string()
}
