// Locates the ytInitialData JSON embedded in a YouTube page

use log::debug;
use scraper::Html;

const INITIAL_DATA_PREFIX: &str = "var ytInitialData =";

/// Find the `var ytInitialData = ...;` script and return its JSON payload.
///
/// The whole document is walked in pre-order and the first matching
/// `<script>` wins. `None` means no such script exists (or its payload is
/// empty); the caller decides whether that is an error.
pub fn locate_initial_data(body: &[u8]) -> Option<String> {
    let html = String::from_utf8_lossy(body);
    let document = Html::parse_document(&html);

    for node in document.tree.root().descendants() {
        let is_script = node
            .value()
            .as_element()
            .map_or(false, |el| el.name() == "script");
        if !is_script {
            continue;
        }

        let Some(text) = node.first_child().and_then(|c| c.value().as_text()) else {
            continue;
        };
        let script: &str = text;

        if let Some(rest) = script.strip_prefix(INITIAL_DATA_PREFIX) {
            let payload = rest.trim().trim_matches(';').trim();
            if payload.is_empty() {
                debug!("[Locator] ytInitialData script found but empty");
                return None;
            }
            debug!("[Locator] Found ytInitialData ({} bytes)", payload.len());
            return Some(payload.to_string());
        }
    }

    debug!("[Locator] No ytInitialData script in document");
    None
}
