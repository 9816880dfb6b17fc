// Page fetcher trait definition

use async_trait::async_trait;

use super::errors::Result;

/// Source of raw page bodies; the extraction core never does I/O itself
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Name of the fetcher (for logging)
    fn name(&self) -> &'static str;

    /// GET `url` and return the response body
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
