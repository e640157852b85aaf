//! Info resolution: URL in, simplified metadata out

use crate::extractor::select::filter_muxed;
use crate::extractor::Extractor;
use crate::proxy::models::{FormatDescriptor, InfoResponse, VideoDetails};
use crate::utils::error::TubegrabError;
use tracing::{debug, info};

/// Validate `url`, fetch its metadata and project the muxed formats.
///
/// The extractor is not consulted for metadata when the URL is missing or
/// rejected by its validator.
pub async fn resolve_info(
    extractor: &dyn Extractor,
    url: Option<&str>,
) -> Result<InfoResponse, TubegrabError> {
    let url = require_valid_url(extractor, url)?;

    let info = extractor.get_info(url).await?;
    info!(
        "Resolved {} ({} formats) via {}",
        info.title,
        info.formats.len(),
        extractor.id()
    );

    let formats: Vec<FormatDescriptor> = filter_muxed(&info.formats)
        .into_iter()
        .map(FormatDescriptor::from)
        .collect();
    debug!("{} muxed formats kept", formats.len());

    Ok(InfoResponse {
        video_details: VideoDetails::from(&info),
        formats,
    })
}

pub(crate) fn require_valid_url<'a>(
    extractor: &dyn Extractor,
    url: Option<&'a str>,
) -> Result<&'a str, TubegrabError> {
    match url {
        Some(url) if !url.trim().is_empty() && extractor.validate_url(url) => Ok(url.trim()),
        Some(url) => Err(TubegrabError::InvalidUrl(url.to_string())),
        None => Err(TubegrabError::InvalidUrl("missing url".to_string())),
    }
}
