// Playlist module - extraction of playlists from YouTube pages
//
// Pipeline (leaves first):
// - reference: playlist id / listing URL resolution
// - locator:   ytInitialData script inside the HTML
// - navigator: step paths into the JSON, playlist vs. channel grid
// - renderers: per-video records and duration normalization
// - assembler: the Playlist value
//
// The pipeline is synchronous and does no I/O. `PlaylistClient` adds the
// fetch step on top through a `PageFetcher`.

pub mod assembler;
pub mod client;
pub mod config;
pub mod errors;
pub mod fetcher;
pub mod locator;
pub mod models;
pub mod navigator;
pub mod reference;
pub(crate) mod renderers;
pub mod traits;

pub use assembler::{parse_initial_data, parse_playlist_page};
pub use client::PlaylistClient;
pub use config::{DurationPolicy, ExtractorConfig};
pub use errors::{PlaylistError, Result};
pub use fetcher::HttpFetcher;
pub use models::{ListingKind, ListingTarget, Playlist, PlaylistEntry};
pub use reference::{classify_url, extract_playlist_id, playlist_fetch_url};
pub use traits::PageFetcher;
