//! API client configuration.

use url::Url;

use crate::error::ConfigError;

/// Address used when nothing overrides it.
pub const DEFAULT_API_URL: &str = "https://ulms-server.vercel.app/api/v1";

/// Variable consulted at runtime (native builds) and at build time (all builds).
pub const API_URL_ENV: &str = "ULMS_API_URL";

/// Base address and credential policy for the single shared HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    with_credentials: bool,
}

impl ApiConfig {
    /// Validate `base_url` and build a config that forwards credentials.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim();
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            value: base_url.to_string(),
            reason,
        };

        let parsed = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme `{}`", parsed.scheme())));
        }

        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
            with_credentials: true,
        })
    }

    /// Resolve the base address from the environment.
    ///
    /// Order:
    /// - `ULMS_API_URL` at runtime (ignored on wasm, where there is no process env)
    /// - `ULMS_API_URL` at build time
    /// - [`DEFAULT_API_URL`]
    pub fn from_env() -> Result<Self, ConfigError> {
        let runtime = std::env::var(API_URL_ENV).ok();
        let base = resolve_base_url(runtime.as_deref(), option_env!("ULMS_API_URL"));
        Self::new(base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether cookies are forwarded on every request.
    pub fn with_credentials(&self) -> bool {
        self.with_credentials
    }

    /// Join `path` onto the base address with exactly one separator.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            with_credentials: true,
        }
    }
}

/// First non-blank candidate wins.
pub fn resolve_base_url<'a>(runtime: Option<&'a str>, build_time: Option<&'a str>) -> &'a str {
    [runtime, build_time]
        .into_iter()
        .flatten()
        .find(|v| !v.trim().is_empty())
        .unwrap_or(DEFAULT_API_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_production_api() {
        let cfg = ApiConfig::default();
        assert_eq!(cfg.base_url(), DEFAULT_API_URL);
        assert!(cfg.with_credentials());
    }

    #[test]
    fn runtime_value_beats_build_time_value() {
        assert_eq!(
            resolve_base_url(Some("http://localhost:5014/api/v1"), Some("https://b")),
            "http://localhost:5014/api/v1"
        );
        assert_eq!(resolve_base_url(None, Some("https://b")), "https://b");
    }

    #[test]
    fn blank_values_are_skipped() {
        assert_eq!(resolve_base_url(Some("   "), None), DEFAULT_API_URL);
        assert_eq!(resolve_base_url(Some(""), Some("https://b")), "https://b");
    }

    #[test]
    fn endpoint_joins_with_single_slash() {
        let cfg = ApiConfig::new("http://localhost:5014/api/v1/").unwrap();
        assert_eq!(cfg.endpoint("user/me"), "http://localhost:5014/api/v1/user/me");
        assert_eq!(cfg.endpoint("/user/me"), "http://localhost:5014/api/v1/user/me");
    }

    #[test]
    fn absolute_paths_pass_through() {
        let cfg = ApiConfig::default();
        assert_eq!(cfg.endpoint("https://cdn.example/x"), "https://cdn.example/x");
    }

    #[test]
    fn rejects_non_http_schemes_and_garbage() {
        assert!(matches!(
            ApiConfig::new("ftp://files.example"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(ApiConfig::new("not a url").is_err());
    }
}
