//! Download proxying: resolve a format and hand back its byte stream

use crate::extractor::select::{choose_format, FormatSelector};
use crate::extractor::{ByteStream, Extractor, Format};
use crate::proxy::resolver::require_valid_url;
use crate::utils::error::TubegrabError;
use tracing::info;

/// A download ready to be written to the response
pub struct PreparedDownload {
    pub title: String,
    pub format: Format,
    pub stream: ByteStream,
}

impl PreparedDownload {
    /// `<title>.<container>`
    pub fn filename(&self) -> String {
        attachment_filename(&self.title, self.format.container())
    }

    pub fn content_disposition(&self) -> String {
        content_disposition(&self.filename())
    }

    pub fn content_type(&self) -> &'static str {
        content_type_for_container(self.format.container())
    }
}

impl std::fmt::Debug for PreparedDownload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreparedDownload")
            .field("title", &self.title)
            .field("format", &self.format.format_id)
            .finish_non_exhaustive()
    }
}

/// Validate `url`, re-fetch its metadata, choose the format named by
/// `selector` and open the byte stream for it.
///
/// Nothing from an earlier `/api/info` call is reused.
pub async fn prepare_download(
    extractor: &dyn Extractor,
    url: Option<&str>,
    selector: &FormatSelector,
) -> Result<PreparedDownload, TubegrabError> {
    let url = require_valid_url(extractor, url)?;

    let info = extractor.get_info(url).await?;
    let format = choose_format(&info.formats, selector)
        .cloned()
        .ok_or_else(|| TubegrabError::FormatNotFound(selector.to_string()))?;

    info!(
        "Streaming {} as itag {} ({})",
        info.title,
        format.format_id,
        format.container()
    );
    let stream = extractor.open_stream(url, &format).await?;

    Ok(PreparedDownload {
        title: info.title,
        format,
        stream,
    })
}

/// Plain concatenation. Characters that are illegal in filenames, quotes
/// included, are passed through unchanged.
pub fn attachment_filename(title: &str, container: &str) -> String {
    format!("{}.{}", title, container)
}

pub fn content_disposition(filename: &str) -> String {
    format!("attachment; filename=\"{}\"", filename)
}

pub fn content_type_for_container(container: &str) -> &'static str {
    match container {
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "3gp" => "video/3gpp",
        "m4a" => "audio/mp4",
        _ => "application/octet-stream",
    }
}
