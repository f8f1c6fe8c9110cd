//! Helpers for reaching the aggregation backend from the browser.

/// Base URL of the backend API.
///
/// Derived from the current window location; the backend listens on port
/// 3000 next to the host serving the frontend. Returns an empty string when
/// no window is available (non-browser targets).
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}
