//! In-memory extractor used by the integration tests
#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{self, StreamExt};
use std::sync::atomic::{AtomicUsize, Ordering};
use tubegrab::extractor::{ByteStream, Extractor, Format, Thumbnail, VideoInfo};

pub const VALID_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
pub const PAYLOAD: &[&[u8]] = &[b"first chunk|", b"second chunk"];

/// Returns a fixed `VideoInfo` and a fixed byte payload, counting calls
pub struct StaticExtractor {
    info: Option<VideoInfo>,
    pub info_calls: AtomicUsize,
    pub stream_calls: AtomicUsize,
}

impl StaticExtractor {
    pub fn new(info: VideoInfo) -> Self {
        Self {
            info: Some(info),
            info_calls: AtomicUsize::new(0),
            stream_calls: AtomicUsize::new(0),
        }
    }

    /// Every metadata fetch fails like an upstream network error
    pub fn failing() -> Self {
        Self {
            info: None,
            info_calls: AtomicUsize::new(0),
            stream_calls: AtomicUsize::new(0),
        }
    }

    pub fn info_calls(&self) -> usize {
        self.info_calls.load(Ordering::SeqCst)
    }

    pub fn stream_calls(&self) -> usize {
        self.stream_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Extractor for StaticExtractor {
    fn id(&self) -> &'static str {
        "static"
    }

    async fn get_info(&self, _url: &str) -> Result<VideoInfo> {
        self.info_calls.fetch_add(1, Ordering::SeqCst);
        self.info
            .clone()
            .ok_or_else(|| anyhow!("ECONNRESET while talking to the video host"))
    }

    async fn open_stream(&self, _url: &str, _format: &Format) -> Result<ByteStream> {
        self.stream_calls.fetch_add(1, Ordering::SeqCst);
        let chunks = PAYLOAD
            .iter()
            .map(|chunk| Ok::<_, std::io::Error>(Bytes::from_static(*chunk)))
            .collect::<Vec<_>>();
        Ok(stream::iter(chunks).boxed())
    }
}

pub fn format(id: &str, ext: &str, vcodec: &str, acodec: &str, height: Option<u32>) -> Format {
    Format {
        format_id: id.to_string(),
        ext: ext.to_string(),
        vcodec: Some(vcodec.to_string()),
        acodec: Some(acodec.to_string()),
        height,
        ..Default::default()
    }
}

pub fn sample_video() -> VideoInfo {
    VideoInfo {
        id: "dQw4w9WgXcQ".to_string(),
        title: "Sample Video".to_string(),
        webpage_url: Some(VALID_URL.to_string()),
        thumbnails: vec![
            Thumbnail {
                url: "https://i.ytimg.com/vi/dQw4w9WgXcQ/default.jpg".to_string(),
                ..Default::default()
            },
            Thumbnail {
                url: "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg".to_string(),
                ..Default::default()
            },
            Thumbnail {
                url: "https://i.ytimg.com/vi/dQw4w9WgXcQ/maxresdefault.jpg".to_string(),
                ..Default::default()
            },
        ],
        thumbnail: None,
        uploader: Some("Uploader".to_string()),
        channel: None,
        duration: Some(125.0),
        formats: vec![
            format("18", "mp4", "avc1.42001E", "mp4a.40.2", Some(360)),
            format("140", "m4a", "none", "mp4a.40.2", None),
            format("137", "mp4", "avc1.640028", "none", Some(1080)),
            format("43", "webm", "vp8.0", "vorbis", Some(360)),
        ],
    }
}
