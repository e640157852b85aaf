use crate::extractor::models::{Format, VideoInfo};
use crate::extractor::validate;
use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;

/// Media bytes as they arrive from the extraction backend
pub type ByteStream = BoxStream<'static, std::io::Result<Bytes>>;

/// Core trait for video extraction backends
///
/// This trait isolates the HTTP layer from the specific extraction method
/// (yt-dlp subprocess, in-memory fixtures in tests, etc.).
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Returns a unique identifier for this extractor (e.g. "ytdlp")
    fn id(&self) -> &'static str;

    /// Checks whether the URL is one this extractor accepts
    fn validate_url(&self, url: &str) -> bool {
        validate::is_valid_url(url)
    }

    /// Fetches full video metadata including every format
    async fn get_info(&self, url: &str) -> Result<VideoInfo>;

    /// Starts streaming the bytes of one format
    async fn open_stream(&self, url: &str, format: &Format) -> Result<ByteStream>;
}
