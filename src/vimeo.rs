//! Vimeo URL helpers.
//!
//! Video ids appear in two shapes in our content: player links like
//! `https://player.vimeo.com/video/123` and plain `https://vimeo.com/123`.
//! Thumbnails come from vumbnail.com, which serves a JPEG per video id
//! without any API handshake. Nothing here talks to the network; an id that
//! doesn't resolve to a real video is the embed's problem, not ours.

use once_cell::sync::Lazy;
use regex::Regex;

static VIDEO_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/video/(\d+)").expect("valid regex"));
static BARE_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"vimeo\.com/(\d+)").expect("valid regex"));

/// Hash parameter the player embeds require for unlisted videos.
const PLAYER_HASH: &str = "5aba4e318d";

/// Extracts the numeric video id, trying the `/video/<id>` path form before
/// the bare `vimeo.com/<id>` form.
pub fn video_id(url: &str) -> Option<&str> {
    VIDEO_PATH_RE
        .captures(url)
        .or_else(|| BARE_URL_RE.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Thumbnail URL for a video link, if one can be derived.
///
/// `None` in means `None` out; callers render their own non-thumbnail
/// fallback instead of a broken image.
pub fn thumbnail_url(url: Option<&str>) -> Option<String> {
    let id = video_id(url?)?;
    Some(format!("https://vumbnail.com/{id}.jpg"))
}

/// Autoplaying player embed URL, or `None` when no id can be extracted, in
/// which case the modal shows its "Video not available" state.
pub fn embed_url(url: &str) -> Option<String> {
    let id = video_id(url)?;
    Some(format!(
        "https://player.vimeo.com/video/{id}?h={PLAYER_HASH}&autoplay=1&title=0&byline=0&portrait=0"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_from_bare_url() {
        let thumb = thumbnail_url(Some("https://vimeo.com/123456789")).unwrap();
        assert!(thumb.contains("123456789"));
        assert_eq!(thumb, "https://vumbnail.com/123456789.jpg");
    }

    #[test]
    fn extracts_id_from_video_path() {
        let thumb = thumbnail_url(Some("https://vimeo.com/video/987654321")).unwrap();
        assert!(thumb.contains("987654321"));
    }

    #[test]
    fn video_path_wins_over_bare_form() {
        // Player URLs match both patterns; the path form must be tried first.
        assert_eq!(
            video_id("https://player.vimeo.com/video/111222333?h=abc"),
            Some("111222333")
        );
    }

    #[test]
    fn non_vimeo_url_yields_none() {
        assert_eq!(thumbnail_url(Some("https://example.com/not-vimeo")), None);
        assert_eq!(video_id("https://vimeo.com/about"), None);
    }

    #[test]
    fn absent_url_yields_none() {
        assert_eq!(thumbnail_url(None), None);
    }

    #[test]
    fn embed_url_carries_player_params() {
        let embed = embed_url("https://vimeo.com/1122303387").unwrap();
        assert!(embed.starts_with("https://player.vimeo.com/video/1122303387?"));
        assert!(embed.contains("h=5aba4e318d"));
        assert!(embed.contains("autoplay=1"));
        assert_eq!(embed_url("https://example.com/clip"), None);
    }
}
