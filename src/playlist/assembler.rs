// Playlist assembly: page bytes -> Playlist

use log::{debug, warn};
use serde_json::Value;

use super::config::ExtractorConfig;
use super::errors::{PlaylistError, Result};
use super::locator::locate_initial_data;
use super::models::Playlist;
use super::navigator::{video_items, PlaylistMetadata};

/// Extract a playlist from a playlist or channel-videos page body.
///
/// `id` and `link` are left empty; `PlaylistClient` fills them from the
/// reference it fetched.
pub fn parse_playlist_page(body: &[u8], config: &ExtractorConfig) -> Result<Playlist> {
    let payload = locate_initial_data(body).ok_or(PlaylistError::EmbeddedDataNotFound)?;
    parse_initial_data(&payload, config)
}

/// Same as [`parse_playlist_page`], starting from the ytInitialData JSON
pub fn parse_initial_data(json: &str, config: &ExtractorConfig) -> Result<Playlist> {
    let data: Value = serde_json::from_str(json).map_err(PlaylistError::MalformedPlaylistPayload)?;

    let metadata = PlaylistMetadata::from_initial_data(&data);
    let items = video_items(&data)?;

    let mut videos = Vec::with_capacity(items.len());
    for item in items {
        let Some(node) = item.into_node() else {
            continue;
        };
        if node.video_id().is_empty() {
            warn!("[Assembler] Skipping video without id");
            continue;
        }
        videos.push(node.into_entry(config.duration_policy)?);
    }

    debug!(
        "[Assembler] Playlist {:?} by {:?}: {} videos",
        metadata.title,
        metadata.author,
        videos.len()
    );

    Ok(Playlist {
        id: String::new(),
        title: metadata.title,
        author: metadata.author,
        description: metadata.description,
        link: String::new(),
        image: metadata.image,
        pub_date: None,
        videos,
    })
}
