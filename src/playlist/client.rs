// Playlist client - fetch a page and run it through extraction

use log::{debug, info};

use super::assembler::parse_playlist_page;
use super::config::ExtractorConfig;
use super::errors::Result;
use super::fetcher::HttpFetcher;
use super::models::Playlist;
use super::reference::{classify_url, extract_playlist_id, playlist_fetch_url, playlist_link};
use super::traits::PageFetcher;

pub struct PlaylistClient<F: PageFetcher = HttpFetcher> {
    fetcher: F,
    config: ExtractorConfig,
}

impl PlaylistClient<HttpFetcher> {
    /// Client backed by reqwest, configured from `config`
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self { fetcher, config })
    }
}

impl<F: PageFetcher> PlaylistClient<F> {
    pub fn with_fetcher(fetcher: F, config: ExtractorConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Fetch a playlist by bare id or by any URL carrying `list=<id>`
    pub async fn fetch_playlist(&self, reference: &str) -> Result<Playlist> {
        let id = extract_playlist_id(reference)?;
        let url = playlist_fetch_url(&id);
        debug!("[Client] Fetching playlist {} via {}", id, self.fetcher.name());

        let body = self.fetcher.fetch(&url).await?;
        let mut playlist = parse_playlist_page(&body, &self.config)?;
        playlist.link = playlist_link(&id);
        playlist.id = id;

        info!(
            "[Client] Playlist {} ({}): {} videos",
            playlist.id,
            playlist.title,
            playlist.videos.len()
        );
        Ok(playlist)
    }

    /// Fetch the listing behind a playlist or channel URL
    pub async fn fetch_listing(&self, url: &str) -> Result<Playlist> {
        let target = classify_url(url)?;
        debug!(
            "[Client] {} listing {} via {}",
            target.kind,
            target.url,
            self.fetcher.name()
        );

        let body = self.fetcher.fetch(&target.url).await?;
        let mut playlist = parse_playlist_page(&body, &self.config)?;
        playlist.id = target.id;
        playlist.link = target.url;

        info!(
            "[Client] Listing {} ({}): {} videos",
            playlist.link,
            playlist.title,
            playlist.videos.len()
        );
        Ok(playlist)
    }
}
