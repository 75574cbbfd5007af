//! Mock swatch catalog built on wiremock.

use serde_json::Value;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockBuilder, MockServer, ResponseTemplate,
};

use super::fixtures;

/// Wrapper around wiremock MockServer serving the catalog's swatch listing
pub struct MockCatalog {
    pub server: MockServer,
}

impl MockCatalog {
    /// Start a new mock catalog
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// API root to put in `CatalogConfig::base_url`
    pub fn base_url(&self) -> String {
        format!("{}/api", self.server.uri())
    }

    /// Serve `pages` in order; page 1 at `/api/swatch/`, page N at `?page=N`
    pub async fn serve_pages(&self, pages: Vec<Vec<Value>>) {
        let total = pages.len() as u32;
        for (i, records) in pages.into_iter().enumerate() {
            let number = i as u32 + 1;
            let body = fixtures::page(&self.base_url(), number, records, number < total);
            self.mount_page(number, ResponseTemplate::new(200).set_body_json(body))
                .await;
        }
    }

    /// Fail page `number` with `status` for the first `times` requests
    pub async fn fail_page(&self, number: u32, status: u16, times: u64) {
        self.page_matcher(number)
            .respond_with(ResponseTemplate::new(status))
            .up_to_n_times(times)
            .with_priority(1)
            .mount(&self.server)
            .await;
    }

    /// Serve a raw body for page 1
    pub async fn serve_raw(&self, body: &str) {
        self.mount_page(
            1,
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "application/json"),
        )
        .await;
    }

    fn page_matcher(&self, number: u32) -> MockBuilder {
        let builder = Mock::given(method("GET")).and(path("/api/swatch/"));
        if number > 1 {
            builder.and(query_param("page", number.to_string()))
        } else {
            builder
        }
    }

    async fn mount_page(&self, number: u32, response: ResponseTemplate) {
        // Page-specific mocks outrank the bare first-page mock, which would
        // otherwise match every page
        let priority = if number > 1 { 2 } else { 3 };
        self.page_matcher(number)
            .respond_with(response)
            .with_priority(priority)
            .mount(&self.server)
            .await;
    }

    /// Number of requests the catalog has received
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or(0)
    }
}
