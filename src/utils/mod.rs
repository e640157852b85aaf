//! Utility modules for error handling, configuration and formatting

pub mod config;
pub mod duration;
pub mod error;

// Re-export for convenience
pub use config::ServerSettings;
pub use duration::{format_duration, format_length_seconds};
pub use error::TubegrabError;
