pub mod models;
pub mod select;
pub mod traits;
pub mod validate;
pub mod ytdlp;

pub use models::{Format, Thumbnail, VideoInfo};
pub use select::{choose_format, filter_muxed, FormatSelector};
pub use traits::{ByteStream, Extractor};
pub use ytdlp::YtDlpExtractor;
