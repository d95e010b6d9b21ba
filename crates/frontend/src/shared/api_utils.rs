//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Backend address used by debug builds when nothing is configured.
pub const DEV_API_BASE: &str = "http://localhost:8000";

/// Get the base URL for API requests
///
/// Resolution order:
/// 1. `HS_API_URL` set at compile time
/// 2. `http://localhost:8000` in debug builds
/// 3. the page origin (same-origin deployment)
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/api/v1/accounts/{}", api_base(), id);
/// ```
pub fn api_base() -> String {
    let origin = web_sys::window().and_then(|w| w.location().origin().ok());
    resolve_api_base(
        option_env!("HS_API_URL"),
        origin.as_deref(),
        cfg!(debug_assertions),
    )
}

/// Pure part of [`api_base`].
pub fn resolve_api_base(configured: Option<&str>, origin: Option<&str>, debug: bool) -> String {
    if let Some(url) = configured.map(str::trim).filter(|u| !u.is_empty()) {
        return url.trim_end_matches('/').to_string();
    }
    if debug {
        return DEV_API_BASE.to_string();
    }
    origin.unwrap_or_default().trim_end_matches('/').to_string()
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_url_wins() {
        assert_eq!(
            resolve_api_base(Some("https://api.example.com/"), Some("https://app.example.com"), true),
            "https://api.example.com"
        );
    }

    #[test]
    fn test_blank_configuration_is_ignored() {
        assert_eq!(resolve_api_base(Some("  "), None, true), DEV_API_BASE);
    }

    #[test]
    fn test_release_build_uses_origin() {
        assert_eq!(
            resolve_api_base(None, Some("https://hs.example.com"), false),
            "https://hs.example.com"
        );
        assert_eq!(resolve_api_base(None, None, false), "");
    }
}
