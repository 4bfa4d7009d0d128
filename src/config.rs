use std::time::Duration;

pub const DEFAULT_SEARCH_URL: &str = "https://openapi.naver.com/v1/search/shop.json";
pub const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 10;

/// Shopping search provider settings, normally read from the environment.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub client_id: String,
    pub client_secret: String,
    pub endpoint: String,
    /// Deadline for one provider call, applied on the HTTP client.
    pub timeout: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            endpoint: DEFAULT_SEARCH_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_SEARCH_TIMEOUT_SECS),
        }
    }
}

impl SearchConfig {
    /// Credentials are trimmed; blanks count as absent.
    pub fn new(
        client_id: Option<&str>,
        client_secret: Option<&str>,
        endpoint: &str,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client_id: client_id.unwrap_or_default().trim().to_string(),
            client_secret: client_secret.unwrap_or_default().trim().to_string(),
            endpoint: endpoint.trim().to_string(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Both credentials present.
    pub fn is_configured(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}
