//! Projections returned to API clients

use crate::extractor::models::{Format, VideoInfo};
use serde::{Serialize, Serializer};

/// `POST /api/info` response body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    pub video_details: VideoDetails,
    pub formats: Vec<FormatDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    pub title: String,
    pub thumbnail: String,
    pub author: String,
    pub length_seconds: String,
}

impl From<&VideoInfo> for VideoDetails {
    fn from(info: &VideoInfo) -> Self {
        Self {
            title: info.title.clone(),
            thumbnail: info.best_thumbnail().unwrap_or_default().to_string(),
            author: info.author().to_string(),
            length_seconds: info.length_seconds(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatDescriptor {
    pub itag: Itag,
    pub quality_label: Option<String>,
    pub container: String,
    pub has_audio: bool,
    pub has_video: bool,
}

impl FormatDescriptor {
    /// Label shown to users; audio-only formats have none upstream
    pub fn display_label(&self) -> &str {
        self.quality_label.as_deref().unwrap_or("Audio Only")
    }
}

impl From<&Format> for FormatDescriptor {
    fn from(format: &Format) -> Self {
        Self {
            itag: Itag(format.format_id.clone()),
            quality_label: format.quality_label(),
            container: format.container().to_string(),
            has_audio: format.has_audio(),
            has_video: format.has_video(),
        }
    }
}

/// Format identifier. Serialized as a JSON number when it is numeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Itag(pub String);

impl Itag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Itag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Itag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.parse::<u64>() {
            Ok(n) if n.to_string() == self.0 => serializer.serialize_u64(n),
            _ => serializer.serialize_str(&self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_itag_serialization() {
        assert_eq!(serde_json::to_value(Itag("22".into())).unwrap(), json!(22));
        assert_eq!(serde_json::to_value(Itag("hls-720".into())).unwrap(), json!("hls-720"));
        // Leading zeros would not survive a number round trip
        assert_eq!(serde_json::to_value(Itag("022".into())).unwrap(), json!("022"));
    }

    #[test]
    fn test_descriptor_field_names() {
        let format = Format {
            format_id: "18".into(),
            ext: "mp4".into(),
            vcodec: Some("avc1.42001E".into()),
            acodec: Some("mp4a.40.2".into()),
            height: Some(360),
            ..Default::default()
        };
        let value = serde_json::to_value(FormatDescriptor::from(&format)).unwrap();
        assert_eq!(
            value,
            json!({
                "itag": 18,
                "qualityLabel": "360p",
                "container": "mp4",
                "hasAudio": true,
                "hasVideo": true
            })
        );
    }

    #[test]
    fn test_display_label() {
        let audio = FormatDescriptor {
            itag: Itag("140".into()),
            quality_label: None,
            container: "m4a".into(),
            has_audio: true,
            has_video: false,
        };
        assert_eq!(audio.display_label(), "Audio Only");
    }
}
