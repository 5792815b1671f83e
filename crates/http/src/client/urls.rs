//! Short URL API client methods

use super::{ClientError, ZaplinkClient};
use reqwest::Method;
use zaplink_core::types::{
    Analytics, AnalyticsRange, BulkShortenEntry, BulkShortenResponse, MessageResponse,
    ShortenRequest, ShortenResponse, UrlListResponse, UrlSummary,
};

impl ZaplinkClient {
    /// Shorten a single URL
    pub async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResponse, ClientError> {
        let req = self
            .request(Method::POST, "/shorten")
            .query(&request.query_pairs());
        self.execute(req).await
    }

    /// Shorten several URLs in one call
    pub async fn bulk_shorten(
        &self,
        entries: &[BulkShortenEntry],
    ) -> Result<BulkShortenResponse, ClientError> {
        let req = self.request(Method::POST, "/bulk-shorten").json(entries);
        self.execute(req).await
    }

    /// The signed-in user's links carrying `tag`
    pub async fn list_urls(&self, tag: &str) -> Result<UrlListResponse, ClientError> {
        let req = self
            .request(Method::GET, "/urls")
            .query(&[("tag", tag.trim())]);
        self.execute(req).await
    }

    pub async fn delete_url(&self, id: &str) -> Result<MessageResponse, ClientError> {
        let req = self.request(Method::DELETE, &format!("/{id}"));
        self.execute(req).await
    }

    /// Address of the QR code image, for use in an `img` tag
    pub fn qr_code_url(&self, short_id: &str) -> String {
        format!("{}/{short_id}/qr", self.api_base_url())
    }

    /// QR code image bytes, fetched with the bearer token
    pub async fn fetch_qr_code(&self, short_id: &str) -> Result<Vec<u8>, ClientError> {
        let req = self.request(Method::GET, &format!("/{short_id}/qr"));
        self.execute_bytes(req).await
    }

    /// Analytics for one day, optionally widened to `range`
    pub async fn analytics(
        &self,
        short_id: &str,
        date: &str,
        range: Option<AnalyticsRange>,
    ) -> Result<Analytics, ClientError> {
        let mut req = self
            .request(Method::GET, &format!("/{short_id}/analytics"))
            .query(&[("date", date)]);
        if let Some(range) = range {
            req = req.query(&[("range", range.as_str())]);
        }
        self.execute(req).await
    }

    /// AI-generated summary and keywords of the target page
    pub async fn summary(&self, short_id: &str) -> Result<UrlSummary, ClientError> {
        let req = self.request(Method::GET, &format!("/{short_id}/summary"));
        self.execute(req).await
    }
}
