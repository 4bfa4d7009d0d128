use async_trait::async_trait;

use crate::config::SearchConfig;
use crate::error::Result;
use crate::models::{RawListing, SearchResponse};

/// Largest result count the provider accepts per call.
const MAX_DISPLAY: usize = 100;

/// External shopping search capability.
///
/// `search` never fails: transport errors, bad statuses and undecodable
/// bodies all come back as an empty list. One attempt per call, no retries.
#[async_trait]
pub trait ShoppingSearch: Send + Sync {
    /// Whether credentials are configured.
    fn is_available(&self) -> bool;

    async fn search(&self, query: &str, limit: usize) -> Vec<RawListing>;
}

/// Naver Shopping search API client.
pub struct NaverShoppingClient {
    config: SearchConfig,
    http: reqwest::Client,
}

impl NaverShoppingClient {
    pub fn new(config: SearchConfig) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    async fn fetch(&self, query: &str, display: usize) -> reqwest::Result<SearchResponse> {
        self.http
            .get(&self.config.endpoint)
            .query(&[
                ("query", query.to_string()),
                ("display", display.to_string()),
                ("sort", "sim".to_string()),
            ])
            .header("X-Naver-Client-Id", self.config.client_id.as_str())
            .header("X-Naver-Client-Secret", self.config.client_secret.as_str())
            .send()
            .await?
            .error_for_status()?
            .json::<SearchResponse>()
            .await
    }
}

#[async_trait]
impl ShoppingSearch for NaverShoppingClient {
    fn is_available(&self) -> bool {
        self.config.is_configured()
    }

    async fn search(&self, query: &str, limit: usize) -> Vec<RawListing> {
        if !self.is_available() {
            tracing::warn!("Shopping search credentials not configured; skipping search");
            return Vec::new();
        }
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let display = limit.clamp(1, MAX_DISPLAY);
        match self.fetch(query, display).await {
            Ok(response) => {
                tracing::info!(query, results = response.items.len(), "Shopping search succeeded");
                response.items
            }
            Err(e) => {
                tracing::warn!(query, error = %e, "Shopping search failed");
                Vec::new()
            }
        }
    }
}
