pub mod playlist;

pub use playlist::{
    classify_url, extract_playlist_id, parse_initial_data, parse_playlist_page, DurationPolicy,
    ExtractorConfig, HttpFetcher, ListingKind, ListingTarget, PageFetcher, Playlist,
    PlaylistClient, PlaylistEntry, PlaylistError,
};
