//! tubegrab library

pub mod extractor;
pub mod proxy;
pub mod server;
pub mod utils;

// Re-export main types for easier use
pub use extractor::{Extractor, Format, FormatSelector, VideoInfo, YtDlpExtractor};
pub use proxy::{
    prepare_download, render_card, resolve_info, FormatDescriptor, InfoResponse, VideoDetails,
};
pub use server::{router, AppState};
pub use utils::{ServerSettings, TubegrabError};
