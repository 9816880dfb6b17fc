// Data models returned by playlist extraction

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use time::OffsetDateTime;

/// Playlist (or channel video listing) extracted from a YouTube page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub title: String,
    pub author: String,
    pub description: String,
    pub link: String,
    /// Cover image URL (channel avatar for channel listings)
    pub image: String,
    /// Never filled by page extraction; left to the caller
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub pub_date: Option<OffsetDateTime>,
    pub videos: Vec<PlaylistEntry>,
}

impl Playlist {
    pub fn total_duration(&self) -> Duration {
        self.videos.iter().map(|v| v.duration).sum()
    }
}

/// One video of a playlist, in listing order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    pub id: String,
    pub title: String,
    pub author: String,
    pub duration: Duration,
}

impl PlaylistEntry {
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }
}

/// Known listing URL shapes, in classifier priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingKind {
    /// `?list=<id>` or `?p=<id>`
    Playlist,
    /// `/c/<name>/videos`
    CustomChannel,
    /// `/channel/<id>/videos`
    Channel,
    /// `/user/<name>/videos`
    User,
    /// `/<name>/videos`
    Handle,
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playlist => write!(f, "playlist"),
            Self::CustomChannel => write!(f, "custom channel"),
            Self::Channel => write!(f, "channel"),
            Self::User => write!(f, "user"),
            Self::Handle => write!(f, "handle"),
        }
    }
}

/// Canonical listing location derived from a user-supplied URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingTarget {
    pub kind: ListingKind,
    /// Captured playlist id, channel id or name
    pub id: String,
    /// Canonical listing URL
    pub url: String,
}
