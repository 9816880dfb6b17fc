// Schema navigation over ytInitialData
//
// All knowledge of where YouTube keeps things lives in the step lists
// below. A missing key, an out-of-range index or a node of the wrong type
// ends navigation with `None`; only decoding the video array can fail.

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use super::errors::{PlaylistError, Result};
use super::renderers::RawVideoItem;

/// One hop in a JSON path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Key(&'static str),
    Index(usize),
}

use Step::{Index, Key};

const PLAYLIST_TITLE: &[Step] = &[Key("metadata"), Key("playlistMetadataRenderer"), Key("title")];

const CHANNEL_TITLE: &[Step] = &[Key("metadata"), Key("channelMetadataRenderer"), Key("title")];

const CHANNEL_DESCRIPTION: &[Step] = &[
    Key("metadata"),
    Key("channelMetadataRenderer"),
    Key("description"),
];

const CHANNEL_AVATAR: &[Step] = &[
    Key("metadata"),
    Key("channelMetadataRenderer"),
    Key("avatar"),
    Key("thumbnails"),
    Index(0),
    Key("url"),
];

const PLAYLIST_OWNER: &[Step] = &[
    Key("sidebar"),
    Key("playlistSidebarRenderer"),
    Key("items"),
    Index(1),
    Key("playlistSidebarSecondaryInfoRenderer"),
    Key("videoOwner"),
    Key("videoOwnerRenderer"),
    Key("title"),
    Key("runs"),
    Index(0),
    Key("text"),
];

const PLAYLIST_VIDEOS: &[Step] = &[
    Key("contents"),
    Key("twoColumnBrowseResultsRenderer"),
    Key("tabs"),
    Index(0),
    Key("tabRenderer"),
    Key("content"),
    Key("sectionListRenderer"),
    Key("contents"),
    Index(0),
    Key("itemSectionRenderer"),
    Key("contents"),
    Index(0),
    Key("playlistVideoListRenderer"),
    Key("contents"),
];

const GRID_VIDEOS: &[Step] = &[
    Key("contents"),
    Key("twoColumnBrowseResultsRenderer"),
    Key("tabs"),
    Index(1),
    Key("tabRenderer"),
    Key("content"),
    Key("sectionListRenderer"),
    Key("contents"),
    Index(0),
    Key("itemSectionRenderer"),
    Key("contents"),
    Index(0),
    Key("gridRenderer"),
    Key("items"),
];

/// Follow `path` from `root`, stopping with `None` at the first missing hop
pub fn navigate<'a>(root: &'a Value, path: &[Step]) -> Option<&'a Value> {
    path.iter().try_fold(root, |node, step| match step {
        Key(key) => node.as_object()?.get(*key),
        Index(i) => node.as_array()?.get(*i),
    })
}

/// String at `path`, or "" when absent or not a string
pub fn navigate_str<'a>(root: &'a Value, path: &[Step]) -> &'a str {
    navigate(root, path).and_then(Value::as_str).unwrap_or("")
}

/// Playlist-level fields of a page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaylistMetadata {
    pub title: String,
    pub author: String,
    pub description: String,
    pub image: String,
}

impl PlaylistMetadata {
    pub fn from_initial_data(data: &Value) -> Self {
        let mut title = navigate_str(data, PLAYLIST_TITLE);
        if title.is_empty() {
            title = navigate_str(data, CHANNEL_TITLE);
        }

        let mut author = navigate_str(data, PLAYLIST_OWNER);
        if author.is_empty() {
            author = title;
        }

        Self {
            title: title.to_string(),
            author: author.to_string(),
            description: navigate_str(data, CHANNEL_DESCRIPTION).to_string(),
            image: navigate_str(data, CHANNEL_AVATAR).to_string(),
        }
    }
}

/// Raw video records of the page: playlist contents, or the channel grid
/// when the playlist path has none.
pub(crate) fn video_items(data: &Value) -> Result<Vec<RawVideoItem>> {
    let items = decode_items(navigate(data, PLAYLIST_VIDEOS))?;
    if !items.is_empty() {
        debug!("[Navigator] {} playlist video items", items.len());
        return Ok(items);
    }

    let items = decode_items(navigate(data, GRID_VIDEOS))?;
    debug!("[Navigator] Playlist path empty, {} grid video items", items.len());
    Ok(items)
}

fn decode_items(node: Option<&Value>) -> Result<Vec<RawVideoItem>> {
    match node {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(node) => {
            Vec::<RawVideoItem>::deserialize(node).map_err(PlaylistError::MalformedPlaylistPayload)
        }
    }
}
