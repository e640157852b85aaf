//! yt-dlp wrapper for video extraction
//!
//! Metadata comes from `yt-dlp --dump-json`; downloads are streamed from
//! `yt-dlp -f <itag> -o -` stdout while the child process runs.

use crate::extractor::models::{Format, VideoInfo};
use crate::extractor::traits::{ByteStream, Extractor};
use crate::utils::error::TubegrabError;
use anyhow::Result;
use async_trait::async_trait;
use futures::future;
use futures::stream::{self, StreamExt};
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as AsyncCommand;
use tokio_util::io::ReaderStream;
use tracing::{debug, error, info, warn};

/// Video extractor backed by the yt-dlp executable
#[derive(Debug, Clone)]
pub struct YtDlpExtractor {
    ytdlp_path: PathBuf,
}

impl YtDlpExtractor {
    /// Initialize extractor and verify yt-dlp availability
    ///
    /// Search order:
    /// 1. System PATH
    /// 2. Common installation paths (Homebrew, pip --user, etc.)
    pub fn new() -> Result<Self> {
        let ytdlp_path = match find_ytdlp() {
            Some(path) => {
                info!("Found yt-dlp at: {}", path.display());
                path
            }
            None => {
                error!("yt-dlp not found anywhere!");
                return Err(TubegrabError::YtDlpNotFound.into());
            }
        };

        Ok(Self { ytdlp_path })
    }

    /// Use an explicit yt-dlp binary
    pub fn with_path(path: impl Into<PathBuf>) -> Result<Self> {
        let ytdlp_path = path.into();
        if !ytdlp_path.is_file() || !is_executable(&ytdlp_path) {
            error!(
                "Configured yt-dlp is missing or not executable: {}",
                ytdlp_path.display()
            );
            return Err(TubegrabError::YtDlpNotFound.into());
        }
        Ok(Self { ytdlp_path })
    }

    /// Get the path to yt-dlp being used
    pub fn ytdlp_path(&self) -> &Path {
        &self.ytdlp_path
    }
}

#[async_trait]
impl Extractor for YtDlpExtractor {
    fn id(&self) -> &'static str {
        "ytdlp"
    }

    /// Extract video information without downloading
    /// Uses: yt-dlp --dump-json --no-download
    async fn get_info(&self, url: &str) -> Result<VideoInfo> {
        debug!("Extracting video info for URL: {}", url);

        let output = AsyncCommand::new(&self.ytdlp_path)
            .arg("--dump-json")
            .arg("--no-download")
            .arg("--no-playlist")
            .arg("--no-warnings")
            .arg(url)
            .output()
            .await
            .map_err(TubegrabError::from)?;

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            error!("yt-dlp extraction failed: {}", error_msg);
            return Err(TubegrabError::ExtractionError(error_msg.trim().to_string()).into());
        }

        let json_str = String::from_utf8(output.stdout)?;
        let video_info: VideoInfo =
            serde_json::from_str(json_str.trim()).map_err(TubegrabError::from)?;

        Ok(video_info)
    }

    /// Stream one format to stdout
    /// Uses: yt-dlp -f <format_id> -o -
    async fn open_stream(&self, url: &str, format: &Format) -> Result<ByteStream> {
        debug!("Streaming format {} from {}", format.format_id, url);

        let mut child = AsyncCommand::new(&self.ytdlp_path)
            .arg("-f")
            .arg(&format.format_id)
            .arg("-o")
            .arg("-")
            .arg("--no-playlist")
            .arg("--no-part")
            .arg("--quiet")
            .arg("--no-warnings")
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(TubegrabError::from)?;

        let stdout = child.stdout.take().ok_or_else(|| {
            TubegrabError::OperationFailed("yt-dlp stdout was not captured".to_string())
        })?;

        if let Some(stderr) = child.stderr.take() {
            tokio::spawn(async move {
                let mut lines = BufReader::new(stderr).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    warn!("yt-dlp: {}", line);
                }
            });
        }

        // The child is owned by the tail of the stream: dropping the body
        // kills the process, reaching the end reports its exit status.
        let exit = stream::once(async move {
            match child.wait().await {
                Ok(status) if status.success() => None,
                Ok(status) => {
                    error!("yt-dlp stream exited with {}", status);
                    Some(Err(io::Error::other(format!("yt-dlp exited with {}", status))))
                }
                Err(e) => Some(Err(e)),
            }
        })
        .filter_map(future::ready);

        Ok(ReaderStream::new(stdout).chain(exit).boxed())
    }
}

// ============================================================
// yt-dlp Detection Functions
// ============================================================

/// Find yt-dlp binary with priority:
/// 1. System PATH
/// 2. Common installation paths
pub fn find_ytdlp() -> Option<PathBuf> {
    if let Some(system) = find_in_path() {
        info!("Using system yt-dlp: {:?}", system);
        return Some(system);
    }

    if let Some(common) = find_in_common_paths() {
        info!("Using yt-dlp from common path: {:?}", common);
        return Some(common);
    }

    warn!("yt-dlp not found anywhere!");
    None
}

/// Find yt-dlp in system PATH using `which`
fn find_in_path() -> Option<PathBuf> {
    which::which("yt-dlp").ok().filter(|path| path.exists())
}

/// Find yt-dlp in common installation paths
fn find_in_common_paths() -> Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = [
        // macOS Homebrew (Apple Silicon)
        "/opt/homebrew/bin/yt-dlp",
        // macOS Homebrew (Intel)
        "/usr/local/bin/yt-dlp",
        // System
        "/usr/bin/yt-dlp",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();

    // pip --user
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".local").join("bin").join("yt-dlp"));
    }

    candidates
        .into_iter()
        .find(|path| path.exists() && is_executable(path))
}

/// Check if a file is executable
fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        std::fs::metadata(path)
            .map(|metadata| metadata.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }

    #[cfg(not(unix))]
    {
        path.exists()
    }
}
