// Playlist id extraction and listing URL classification

use lazy_static::lazy_static;
use regex::Regex;

use super::errors::{PlaylistError, Result};
use super::models::{ListingKind, ListingTarget};

const PLAYLIST_FETCH_URL: &str = "https://www.youtube.com/playlist?list={}&hl=en";

lazy_static! {
    static ref PLAYLIST_ID_RE: Regex = Regex::new(r"^[A-Za-z0-9_-]{18,42}$").unwrap();
    static ref PLAYLIST_IN_URL_RE: Regex =
        Regex::new(r"[&?]list=([A-Za-z0-9_-]{18,42})(&.*)?$").unwrap();

    /// Listing shapes in priority order; first match wins
    static ref LISTING_SHAPES: Vec<(ListingKind, Regex, &'static str)> = vec![
        (
            ListingKind::Playlist,
            Regex::new(r"[?&](?:list|p)=([^/&#]+)").unwrap(),
            "https://www.youtube.com/playlist?list={}",
        ),
        (
            ListingKind::CustomChannel,
            Regex::new(r"/c/([^/&?#]+)/videos").unwrap(),
            "https://www.youtube.com/c/{}/videos",
        ),
        (
            ListingKind::Channel,
            Regex::new(r"/channel/([^/&?#]+)/videos").unwrap(),
            "https://www.youtube.com/channel/{}/videos",
        ),
        (
            ListingKind::User,
            Regex::new(r"/user/([^/&?#]+)/videos").unwrap(),
            "https://www.youtube.com/user/{}/videos",
        ),
        (
            ListingKind::Handle,
            Regex::new(r"/www\.youtube\.com/([^/&?#]+)/videos").unwrap(),
            "https://www.youtube.com/{}/videos",
        ),
    ];
}

/// Resolve a bare playlist id or a URL with a `list=` parameter to the id
pub fn extract_playlist_id(input: &str) -> Result<String> {
    if PLAYLIST_ID_RE.is_match(input) {
        return Ok(input.to_string());
    }

    PLAYLIST_IN_URL_RE
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| PlaylistError::InvalidPlaylistReference(input.to_string()))
}

/// Map a playlist or channel URL to its canonical listing URL
pub fn classify_url(url: &str) -> Result<ListingTarget> {
    for (kind, pattern, template) in LISTING_SHAPES.iter() {
        let Some(caps) = pattern.captures(url) else {
            continue;
        };
        let id = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        if id.is_empty() {
            continue;
        }
        return Ok(ListingTarget {
            kind: *kind,
            id: id.to_string(),
            url: template.replace("{}", id),
        });
    }

    Err(PlaylistError::UnrecognizedUrlShape(url.to_string()))
}

/// Page URL for a playlist id, with the English locale forced
pub fn playlist_fetch_url(id: &str) -> String {
    PLAYLIST_FETCH_URL.replace("{}", id)
}

/// Canonical public link for a playlist id
pub fn playlist_link(id: &str) -> String {
    format!("https://www.youtube.com/playlist?list={}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "PL59FEE129ADFF2B12";

    #[test]
    fn test_bare_id_unchanged() {
        for id in [ID, "PLxxxxxxxxxxxxxxxx", "OLAK5uy_abcdefghijklmnopqrstuvwxyz-_0123"] {
            assert_eq!(extract_playlist_id(id).unwrap(), id);
        }
    }

    #[test]
    fn test_id_from_url() {
        let url = format!("https://www.youtube.com/playlist?list={}", ID);
        assert_eq!(extract_playlist_id(&url).unwrap(), ID);

        let url = format!("https://www.youtube.com/watch?v=abc&list={}&index=3", ID);
        assert_eq!(extract_playlist_id(&url).unwrap(), ID);
    }

    #[test]
    fn test_invalid_reference() {
        for input in ["short", "https://www.youtube.com/watch?v=abc", "PL59FEE129ADFF2B12!"] {
            assert!(matches!(
                extract_playlist_id(input),
                Err(PlaylistError::InvalidPlaylistReference(_))
            ));
        }
    }

    #[test]
    fn test_id_length_bounds() {
        assert!(extract_playlist_id(&"a".repeat(17)).is_err());
        assert!(extract_playlist_id(&"a".repeat(18)).is_ok());
        assert!(extract_playlist_id(&"a".repeat(42)).is_ok());
        assert!(extract_playlist_id(&"a".repeat(43)).is_err());
    }

    #[test]
    fn test_classify_shapes() {
        let cases = [
            (
                "https://www.youtube.com/playlist?list=PLabc&feature=share",
                ListingKind::Playlist,
                "https://www.youtube.com/playlist?list=PLabc",
            ),
            (
                "https://www.youtube.com/c/SomeName/videos?view=0&sort=dd",
                ListingKind::CustomChannel,
                "https://www.youtube.com/c/SomeName/videos",
            ),
            (
                "https://www.youtube.com/channel/UC1234/videos?sort=p",
                ListingKind::Channel,
                "https://www.youtube.com/channel/UC1234/videos",
            ),
            (
                "https://www.youtube.com/user/someuser/videos",
                ListingKind::User,
                "https://www.youtube.com/user/someuser/videos",
            ),
            (
                "https://www.youtube.com/somehandle/videos?app=desktop",
                ListingKind::Handle,
                "https://www.youtube.com/somehandle/videos",
            ),
        ];

        for (url, kind, expected) in cases {
            let target = classify_url(url).unwrap();
            assert_eq!(target.kind, kind, "{}", url);
            assert_eq!(target.url, expected);
        }
    }

    #[test]
    fn test_classify_p_param() {
        let target = classify_url("https://www.youtube.com/view_play_list?p=PLabc").unwrap();
        assert_eq!(target.kind, ListingKind::Playlist);
        assert_eq!(target.id, "PLabc");
    }

    #[test]
    fn test_classify_priority() {
        // A playlist parameter wins over a channel path
        let target = classify_url("https://www.youtube.com/c/Name/videos?list=PLabc").unwrap();
        assert_eq!(target.kind, ListingKind::Playlist);
    }

    #[test]
    fn test_classify_unrecognized() {
        for url in [
            "https://www.youtube.com/watch?v=abc",
            "https://example.com/",
            "https://www.youtube.com/c//videos",
        ] {
            assert!(matches!(
                classify_url(url),
                Err(PlaylistError::UnrecognizedUrlShape(_))
            ));
        }
    }

    #[test]
    fn test_fetch_url() {
        assert_eq!(
            playlist_fetch_url(ID),
            "https://www.youtube.com/playlist?list=PL59FEE129ADFF2B12&hl=en"
        );
    }
}
