// Video renderer wire types and entry normalization
//
// Playlists list `playlistVideoRenderer` records with `lengthSeconds`;
// channel grids list `gridVideoRenderer` records whose duration only exists
// as overlay text ("5:30", "1:05:30").

use log::{debug, warn};
use serde::{Deserialize, Deserializer};
use std::time::Duration;
use time::macros::format_description;
use time::Time;

use super::config::DurationPolicy;
use super::errors::{PlaylistError, Result};
use super::models::PlaylistEntry;

/// `null` decodes like a missing field; YouTube sends both
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// YouTube wraps every title/byline in `{"runs": [{"text": ...}]}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextRuns {
    #[serde(default, deserialize_with = "null_as_default")]
    pub runs: Vec<TextRun>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextRun {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

impl TextRuns {
    /// First run's text, or "" without runs
    pub fn text(&self) -> &str {
        self.runs.first().map(|r| r.text.as_str()).unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StandardRenderer {
    #[serde(deserialize_with = "null_as_default")]
    pub video_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: TextRuns,
    #[serde(deserialize_with = "null_as_default")]
    pub short_byline_text: TextRuns,
    #[serde(deserialize_with = "null_as_default")]
    pub length_seconds: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridRenderer {
    #[serde(deserialize_with = "null_as_default")]
    pub video_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: TextRuns,
    #[serde(deserialize_with = "null_as_default")]
    pub short_byline_text: TextRuns,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail_overlays: Vec<ThumbnailOverlay>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThumbnailOverlay {
    pub thumbnail_overlay_time_status_renderer: Option<TimeStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TimeStatus {
    #[serde(deserialize_with = "null_as_default")]
    pub text: SimpleText,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimpleText {
    #[serde(deserialize_with = "null_as_default")]
    pub simple_text: String,
}

impl GridRenderer {
    /// Time-status text of the first overlay, "" when there is none
    pub fn duration_text(&self) -> &str {
        self.thumbnail_overlays
            .first()
            .and_then(|o| o.thumbnail_overlay_time_status_renderer.as_ref())
            .map(|s| s.text.simple_text.as_str())
            .unwrap_or("")
    }
}

/// One element of a playlist `contents` / grid `items` array as it appears
/// on the wire. Continuation tokens and other records carry neither field.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawVideoItem {
    #[serde(rename = "playlistVideoRenderer", default)]
    pub standard: Option<StandardRenderer>,
    #[serde(rename = "gridVideoRenderer", default)]
    pub grid: Option<GridRenderer>,
}

/// A video record with exactly one renderer populated
#[derive(Debug, Clone)]
pub(crate) enum RawVideoNode {
    Standard(StandardRenderer),
    Grid(GridRenderer),
}

impl RawVideoItem {
    /// `None` unless exactly one renderer is present
    pub fn into_node(self) -> Option<RawVideoNode> {
        match (self.standard, self.grid) {
            (Some(standard), None) => Some(RawVideoNode::Standard(standard)),
            (None, Some(grid)) => Some(RawVideoNode::Grid(grid)),
            (Some(_), Some(_)) => {
                debug!("[Normalizer] Item carries both renderers, skipping");
                None
            }
            (None, None) => None,
        }
    }
}

impl RawVideoNode {
    pub fn video_id(&self) -> &str {
        match self {
            Self::Standard(r) => &r.video_id,
            Self::Grid(r) => &r.video_id,
        }
    }

    pub fn into_entry(self, policy: DurationPolicy) -> Result<PlaylistEntry> {
        match self {
            Self::Standard(r) => {
                let duration = parse_length_seconds(&r.length_seconds, policy)?;
                Ok(PlaylistEntry {
                    title: r.title.text().to_string(),
                    author: r.short_byline_text.text().to_string(),
                    id: r.video_id,
                    duration,
                })
            }
            Self::Grid(r) => {
                let duration = parse_overlay_duration(r.duration_text()).unwrap_or_else(|| {
                    warn!(
                        "[Normalizer] Invalid video duration {:?} for {}",
                        r.duration_text(),
                        r.video_id
                    );
                    Duration::ZERO
                });
                Ok(PlaylistEntry {
                    title: r.title.text().to_string(),
                    author: r.short_byline_text.text().to_string(),
                    id: r.video_id,
                    duration,
                })
            }
        }
    }
}

/// Whole seconds from `lengthSeconds`
fn parse_length_seconds(raw: &str, policy: DurationPolicy) -> Result<Duration> {
    match raw.parse::<u64>() {
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(_) => match policy {
            DurationPolicy::Strict => Err(PlaylistError::InvalidDurationEncoding(raw.to_string())),
            DurationPolicy::Lenient => {
                warn!("[Normalizer] Invalid video duration {:?}, using zero", raw);
                Ok(Duration::ZERO)
            }
        },
    }
}

/// Overlay text "m:ss" or "h:mm:ss" as a span; `None` if it is neither
pub fn parse_overlay_duration(text: &str) -> Option<Duration> {
    let normalized = if text.matches(':').count() == 1 {
        format!("0:{}", text)
    } else {
        text.to_string()
    };

    let format = format_description!(
        "[hour padding:none]:[minute padding:none]:[second padding:none]"
    );
    let parsed = Time::parse(&normalized, format).ok()?;

    let secs = u64::from(parsed.hour()) * 3600
        + u64::from(parsed.minute()) * 60
        + u64::from(parsed.second());
    Some(Duration::from_secs(secs))
}
