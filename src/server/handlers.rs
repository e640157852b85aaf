use crate::extractor::FormatSelector;
use crate::proxy::{self, InfoResponse};
use crate::server::error::{ApiError, BodyKind};
use crate::server::AppState;
use axum::{
    body::Body,
    extract::{rejection::JsonRejection, RawQuery, State},
    http::{
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
        HeaderValue, StatusCode,
    },
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};
use url::form_urlencoded;

pub const HEALTH_TEXT: &str = "Video Downloader Backend is running";

#[derive(Debug, Default, Deserialize)]
pub struct InfoRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Query of `GET /api/download`
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DownloadParams {
    pub url: Option<String>,
    /// Every `itag` value, in request order
    pub itags: Vec<String>,
}

impl DownloadParams {
    /// Repeated `itag` keys accumulate. A repeated `url` is ambiguous and is
    /// dropped, so it is rejected like a missing one.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut urls = Vec::new();
        let mut itags = Vec::new();
        for (key, value) in form_urlencoded::parse(query.unwrap_or_default().as_bytes()) {
            match key.as_ref() {
                "url" => urls.push(value.into_owned()),
                "itag" => itags.push(value.into_owned()),
                _ => {}
            }
        }

        let url = match urls.len() {
            0 | 1 => urls.pop(),
            n => {
                warn!("Download query carries {} url values", n);
                None
            }
        };
        Self { url, itags }
    }

    pub fn selector(&self) -> FormatSelector {
        FormatSelector::from_tokens(self.itags.as_slice())
    }
}

/// `GET /`
pub async fn health() -> &'static str {
    HEALTH_TEXT
}

/// `POST /api/info`
pub async fn video_info(
    State(state): State<AppState>,
    payload: Result<Json<InfoRequest>, JsonRejection>,
) -> Result<Json<InfoResponse>, ApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected info request body: {}", rejection.body_text());
            InfoRequest::default()
        }
    };
    info!("Info requested for {:?}", request.url);

    let response = proxy::resolve_info(state.extractor.as_ref(), request.url.as_deref())
        .await
        .map_err(ApiError::info)?;
    Ok(Json(response))
}

/// `GET /api/download?url=..&itag=..`
pub async fn download(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, ApiError> {
    let params = DownloadParams::from_query(query.as_deref());
    let selector = params.selector();
    info!("Download requested for {:?} (itag {})", params.url, selector);

    let prepared =
        proxy::prepare_download(state.extractor.as_ref(), params.url.as_deref(), &selector)
            .await
            .map_err(ApiError::download)?;

    // from_bytes keeps non-ASCII titles; only control characters are refused
    let disposition = HeaderValue::from_bytes(prepared.content_disposition().as_bytes())
        .map_err(|e| {
            warn!("Title {:?} cannot be sent as a header: {}", prepared.title, e);
            ApiError::internal(BodyKind::Text, "Failed to download video")
        })?;

    let content_type = prepared.content_type();
    Ok((
        StatusCode::OK,
        [
            (CONTENT_DISPOSITION, disposition),
            (CONTENT_TYPE, HeaderValue::from_static(content_type)),
        ],
        Body::from_stream(prepared.stream),
    )
        .into_response())
}
