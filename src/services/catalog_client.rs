//! Client for the remote swatch catalog.
//!
//! Fetches one page of the swatch listing at a time. Transient failures
//! (connection errors, timeouts, 5xx and 429 responses) are retried with a
//! linearly growing backoff; anything else fails immediately.

use async_trait::async_trait;
use std::time::Duration;

use crate::error::CatalogError;
use crate::models::{CatalogConfig, CatalogPage};

/// Source of catalog pages
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch page `page` (1-based) of the swatch listing
    async fn fetch_page(&self, page: u32) -> Result<CatalogPage, CatalogError>;
}

/// Catalog served over HTTP
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
    retry_backoff: Duration,
}

impl HttpCatalog {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("swatchfinder/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
            retry_backoff: Duration::from_millis(config.retry_backoff_ms),
        })
    }

    /// URL of a listing page; the first page has no query string
    pub fn page_url(&self, page: u32) -> String {
        if page > 1 {
            format!("{}/swatch/?page={}", self.base_url, page)
        } else {
            format!("{}/swatch/", self.base_url)
        }
    }

    async fn fetch_once(&self, url: &str) -> Result<CatalogPage, CatalogError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.json::<CatalogPage>().await.map_err(|e| {
            if e.is_decode() {
                CatalogError::Decode {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            } else {
                CatalogError::Http(e)
            }
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_page(&self, page: u32) -> Result<CatalogPage, CatalogError> {
        let url = self.page_url(page);
        let mut attempt = 0;

        loop {
            attempt += 1;
            tracing::debug!(%url, attempt, "Fetching catalog page");

            match self.fetch_once(&url).await {
                Ok(page) => return Ok(page),
                Err(e) if e.is_transient() => {
                    if attempt > self.max_retries {
                        return Err(CatalogError::RetriesExhausted {
                            url,
                            attempts: attempt,
                            last: e.to_string(),
                        });
                    }
                    let delay = self.retry_backoff * attempt;
                    tracing::warn!(%e, %url, attempt, delay_ms = delay.as_millis() as u64, "Catalog request failed, retrying");
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    tracing::error!(%e, %url, "Catalog request failed");
                    return Err(e);
                }
            }
        }
    }
}
