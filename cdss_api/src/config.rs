//! Client settings: where the API lives, how long to wait, and what to
//! send when a query leaves something out.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://dwr.state.co.us/Rest/GET/api/v2";

/// Settings shared by the transport and the client.
///
/// The default points at the production API with a 30 second timeout, no
/// API key, and `DISCHRG` as the telemetry parameter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL, without trailing slash. Endpoint paths are appended as-is.
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    /// Telemetry parameter used when a query does not name one.
    pub default_parameter: String,
    /// Log every request URL at info level instead of debug.
    pub debug: bool,
    /// Sent as the `Token` header and the `apiKey` query parameter.
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("cdss-rs/{}", env!("CARGO_PKG_VERSION")),
            default_parameter: "DISCHRG".to_string(),
            debug: false,
            api_key: None,
        }
    }
}

impl Config {
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }
    pub fn with_default_parameter(mut self, parameter: &str) -> Self {
        self.default_parameter = parameter.to_string();
        self
    }
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.default_parameter, "DISCHRG");
        assert!(config.user_agent.starts_with("cdss-rs/"));
        assert!(!config.debug);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let config = Config::default().with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }
}
