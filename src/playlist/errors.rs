// Error types for playlist extraction

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlaylistError>;

#[derive(Debug, Error)]
pub enum PlaylistError {
    /// Input is neither a bare playlist id nor a URL carrying `list=<id>`
    #[error("Invalid playlist reference: {0}")]
    InvalidPlaylistReference(String),

    /// URL does not match any known playlist/channel listing shape
    #[error("Unrecognized URL shape: {0}")]
    UnrecognizedUrlShape(String),

    /// No `ytInitialData` script was found in the page
    #[error("Embedded ytInitialData not found in page")]
    EmbeddedDataNotFound,

    /// The embedded JSON (or its video array) has an unexpected shape
    #[error("Malformed playlist payload: {0}")]
    MalformedPlaylistPayload(#[source] serde_json::Error),

    /// `lengthSeconds` of a playlist video is not a number
    #[error("Invalid video duration: {0:?}")]
    InvalidDurationEncoding(String),

    /// Transport failure while fetching a page
    #[error("Network error: {0}")]
    Network(String),

    /// Page fetch returned a non-success status
    #[error("HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },
}

impl PlaylistError {
    /// Whether the failure came from the fetch layer rather than the page content
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::HttpStatus { .. })
    }
}

impl From<reqwest::Error> for PlaylistError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            return Self::HttpStatus {
                status: status.as_u16(),
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
            };
        }
        if e.is_timeout() {
            return Self::Network(format!("timed out: {}", e));
        }
        Self::Network(e.to_string())
    }
}
