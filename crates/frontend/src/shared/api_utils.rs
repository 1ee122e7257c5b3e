//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Get the base URL for API requests
///
/// Uses the configured base when set, otherwise `/api` on the origin the
/// console was served from.
///
/// # Returns
/// - API base URL like "http://localhost:8080/api"
/// - "/api" if window is not available
pub fn api_base(configured: &str) -> String {
    if !configured.is_empty() {
        return configured.to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return "/api".to_string(),
    };
    match window.location().origin() {
        Ok(origin) => format!("{}/api", origin),
        Err(_) => "/api".to_string(),
    }
}

/// Join a base and an API path ("/packing/history")
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Path of one packing record; the packing number is URL-encoded
/// because it may contain `/`.
pub fn packing_path(pack_nomor: &str) -> String {
    format!("/packing/{}", urlencoding::encode(pack_nomor))
}
