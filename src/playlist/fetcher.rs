// reqwest-backed page fetcher

use async_trait::async_trait;
use log::debug;
use std::time::Duration;

use super::config::ExtractorConfig;
use super::errors::{PlaylistError, Result};
use super::traits::PageFetcher;

pub struct HttpFetcher {
    client: reqwest::Client,
    accept_language: String,
}

impl HttpFetcher {
    pub fn new(config: &ExtractorConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .user_agent(config.user_agent.clone());

        if let Some(proxy_url) = config.proxy.as_deref() {
            debug!("[Fetcher] Using proxy: {}", proxy_url);
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| PlaylistError::Network(format!("Invalid proxy URL {}: {}", proxy_url, e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| PlaylistError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            accept_language: config.accept_language.clone(),
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    fn name(&self) -> &'static str {
        "reqwest"
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!("[Fetcher] GET {}", url);
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT_LANGUAGE, self.accept_language.as_str())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlaylistError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        debug!("[Fetcher] {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_with_default_config() {
        let fetcher = HttpFetcher::new(&ExtractorConfig::default()).unwrap();
        assert_eq!(fetcher.name(), "reqwest");
        assert_eq!(fetcher.accept_language, "en-US,en;q=0.9");
    }

    #[test]
    fn test_invalid_proxy() {
        let config = ExtractorConfig::default().with_proxy(Some("socks5://[::1".to_string()));
        assert!(matches!(HttpFetcher::new(&config), Err(PlaylistError::Network(_))));
    }
}
