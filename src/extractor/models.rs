//! Data structures for video information as reported by yt-dlp

use serde::{Deserialize, Serialize};

/// Video information structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub webpage_url: Option<String>,
    /// Ordered from lowest to highest preference
    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,
    pub thumbnail: Option<String>,
    pub uploader: Option<String>,
    pub channel: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub formats: Vec<Format>,
}

impl VideoInfo {
    /// Last entry of the thumbnail list, assumed to be the largest
    pub fn best_thumbnail(&self) -> Option<&str> {
        self.thumbnails
            .last()
            .map(|t| t.url.as_str())
            .or(self.thumbnail.as_deref())
    }

    pub fn author(&self) -> &str {
        self.uploader
            .as_deref()
            .or(self.channel.as_deref())
            .unwrap_or_default()
    }

    /// Whole seconds, as the decimal string the API exposes
    pub fn length_seconds(&self) -> String {
        let secs = self
            .duration
            .filter(|d| d.is_finite() && *d > 0.0)
            .map(|d| d.trunc() as u64)
            .unwrap_or(0);
        secs.to_string()
    }
}

/// Thumbnail entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    pub id: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub preference: Option<i32>,
}

/// Video format information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Format {
    /// YouTube itag for YouTube sources
    pub format_id: String,
    #[serde(default)]
    pub ext: String,
    pub format_note: Option<String>,
    pub vcodec: Option<String>,
    pub acodec: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fps: Option<f32>,
    pub tbr: Option<f32>,  // Total bitrate
    pub vbr: Option<f32>,  // Video bitrate
    pub abr: Option<f32>,  // Audio bitrate
    #[serde(default)]
    pub filesize: Option<u64>,
    pub protocol: Option<String>,
}

impl Format {
    pub fn has_video(&self) -> bool {
        codec_present(self.vcodec.as_deref())
    }

    pub fn has_audio(&self) -> bool {
        codec_present(self.acodec.as_deref())
    }

    pub fn is_muxed(&self) -> bool {
        self.has_video() && self.has_audio()
    }

    /// `720p`, `1080p60`, or the format note. Audio-only formats have no label.
    pub fn quality_label(&self) -> Option<String> {
        if !self.has_video() {
            return None;
        }
        match self.height {
            Some(height) => {
                let fps = self.fps.map(|f| f.round() as u32).unwrap_or(0);
                if fps > 30 {
                    Some(format!("{}p{}", height, fps))
                } else {
                    Some(format!("{}p", height))
                }
            }
            None => self.format_note.clone(),
        }
    }

    pub fn container(&self) -> &str {
        &self.ext
    }

    /// Video bitrate, falling back to the total bitrate for muxed formats
    pub(crate) fn video_bitrate(&self) -> f32 {
        self.vbr
            .or(if self.has_video() { self.tbr } else { None })
            .unwrap_or(0.0)
    }

    pub(crate) fn audio_bitrate(&self) -> f32 {
        self.abr
            .or(if self.has_video() { None } else { self.tbr })
            .unwrap_or(0.0)
    }
}

fn codec_present(codec: Option<&str>) -> bool {
    matches!(codec, Some(c) if !c.is_empty() && c != "none")
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = r#"{
        "id": "dQw4w9WgXcQ",
        "title": "Never Gonna Give You Up",
        "webpage_url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        "thumbnails": [
            {"url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/default.jpg", "preference": -10},
            {"url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/maxresdefault.jpg", "preference": 0, "width": 1280, "height": 720}
        ],
        "thumbnail": "https://i.ytimg.com/vi/dQw4w9WgXcQ/maxresdefault.jpg",
        "uploader": "Rick Astley",
        "channel": "Rick Astley",
        "duration": 212.0,
        "view_count": 1600000000,
        "formats": [
            {"format_id": "sb0", "ext": "mhtml", "vcodec": "none", "acodec": "none", "format_note": "storyboard"},
            {"format_id": "140", "ext": "m4a", "vcodec": "none", "acodec": "mp4a.40.2", "abr": 129.5, "format_note": "medium"},
            {"format_id": "18", "ext": "mp4", "vcodec": "avc1.42001E", "acodec": "mp4a.40.2", "height": 360, "width": 640, "fps": 25, "tbr": 503.1},
            {"format_id": "299", "ext": "mp4", "vcodec": "avc1.64002a", "acodec": "none", "height": 1080, "fps": 60, "vbr": 4500.0}
        ]
    }"#;

    #[test]
    fn test_parse_dump_json() {
        let info: VideoInfo = serde_json::from_str(DUMP).unwrap();
        assert_eq!(info.title, "Never Gonna Give You Up");
        assert_eq!(info.formats.len(), 4);
        assert_eq!(
            info.best_thumbnail(),
            Some("https://i.ytimg.com/vi/dQw4w9WgXcQ/maxresdefault.jpg")
        );
        assert_eq!(info.author(), "Rick Astley");
        assert_eq!(info.length_seconds(), "212");
    }

    #[test]
    fn test_track_flags() {
        let info: VideoInfo = serde_json::from_str(DUMP).unwrap();
        let flags: Vec<(bool, bool)> = info
            .formats
            .iter()
            .map(|f| (f.has_video(), f.has_audio()))
            .collect();
        assert_eq!(
            flags,
            vec![(false, false), (false, true), (true, true), (true, false)]
        );
        assert!(info.formats[2].is_muxed());
    }

    #[test]
    fn test_quality_label() {
        let info: VideoInfo = serde_json::from_str(DUMP).unwrap();
        assert_eq!(info.formats[1].quality_label(), None);
        assert_eq!(info.formats[2].quality_label().as_deref(), Some("360p"));
        assert_eq!(info.formats[3].quality_label().as_deref(), Some("1080p60"));

        let no_height = Format {
            format_id: "x".into(),
            vcodec: Some("avc1".into()),
            format_note: Some("medium".into()),
            ..Default::default()
        };
        assert_eq!(no_height.quality_label().as_deref(), Some("medium"));
    }

    #[test]
    fn test_fallbacks() {
        let info = VideoInfo {
            thumbnail: Some("https://i.ytimg.com/fallback.jpg".into()),
            channel: Some("Channel".into()),
            duration: Some(59.9),
            ..Default::default()
        };
        assert_eq!(info.best_thumbnail(), Some("https://i.ytimg.com/fallback.jpg"));
        assert_eq!(info.author(), "Channel");
        assert_eq!(info.length_seconds(), "59");
        assert_eq!(VideoInfo::default().length_seconds(), "0");
        assert_eq!(VideoInfo::default().author(), "");
    }
}
