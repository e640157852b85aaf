//! The two request flows behind the HTTP surface
//!
//! Both are stateless: every call validates the URL and asks the extractor
//! for fresh metadata.

pub mod card;
pub mod download;
pub mod models;
pub mod resolver;

pub use card::render_card;
pub use download::{prepare_download, PreparedDownload};
pub use models::{FormatDescriptor, InfoResponse, Itag, VideoDetails};
pub use resolver::resolve_info;
