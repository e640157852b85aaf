//! YouTube URL validation
//!
//! Accepts the same URL shapes yt-dlp's YouTube extractor is routed for:
//! `watch?v=` links on the YouTube hosts, plus `youtu.be/<id>` and
//! `/embed/`, `/v/`, `/shorts/`, `/live/` paths.

use crate::utils::error::TubegrabError;
use url::Url;

const QUERY_HOSTS: [&str; 5] = [
    "youtube.com",
    "www.youtube.com",
    "m.youtube.com",
    "music.youtube.com",
    "gaming.youtube.com",
];

const PATH_PREFIXES: [&str; 4] = ["embed", "v", "shorts", "live"];

const ID_LEN: usize = 11;

/// Extract the 11-character video id from a YouTube URL
pub fn video_id(link: &str) -> Result<String, TubegrabError> {
    let link = link.trim();
    let parsed = Url::parse(link).map_err(|e| TubegrabError::InvalidUrl(e.to_string()))?;
    let host = parsed.host_str().unwrap_or_default();

    let query_id = parsed
        .query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty());

    // A `v` parameter wins over the path, but only on the query hosts.
    let id = if query_id.is_none() && is_path_url(&parsed) {
        let mut segments = parsed.path_segments().into_iter().flatten();
        let id = if host == "youtu.be" {
            segments.next()
        } else {
            segments.nth(1)
        };
        id.unwrap_or_default().to_string()
    } else if !QUERY_HOSTS.contains(&host) {
        return Err(TubegrabError::InvalidUrl(format!(
            "not a YouTube domain: {}",
            host
        )));
    } else {
        query_id.unwrap_or_default()
    };

    if id.is_empty() {
        return Err(TubegrabError::InvalidUrl(format!(
            "no video id found: {}",
            link
        )));
    }

    let id: String = id.chars().take(ID_LEN).collect();
    if !is_valid_id(&id) {
        return Err(TubegrabError::InvalidUrl(format!(
            "video id {} does not match expected format",
            id
        )));
    }
    Ok(id)
}

pub fn is_valid_url(link: &str) -> bool {
    video_id(link).is_ok()
}

pub fn is_valid_id(id: &str) -> bool {
    id.len() == ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// `youtu.be/<id>` or `(www.)youtube.com/{embed,v,shorts,live}/<id>`
fn is_path_url(url: &Url) -> bool {
    if url.scheme() != "http" && url.scheme() != "https" {
        return false;
    }
    match url.host_str() {
        Some("youtu.be") => true,
        Some("youtube.com") | Some("www.youtube.com") => url
            .path_segments()
            .and_then(|mut segments| segments.next())
            .map(|first| PATH_PREFIXES.contains(&first))
            .unwrap_or(false),
        _ => false,
    }
}
