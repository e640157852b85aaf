//! Server configuration

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 4000;

/// Server settings
#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// Interface to bind
    pub host: IpAddr,

    /// Port to bind
    pub port: u16,

    /// Explicit yt-dlp binary; discovered when unset
    pub ytdlp_path: Option<PathBuf>,

    /// CORS origins. Empty allows any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            ytdlp_path: None,
            allowed_origins: Vec::new(),
        }
    }
}

impl ServerSettings {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Drop blank entries and trailing slashes from configured origins
    pub fn normalized_origins(&self) -> Vec<String> {
        self.allowed_origins
            .iter()
            .map(|origin| origin.trim().trim_end_matches('/').to_string())
            .filter(|origin| !origin.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let settings = ServerSettings::default();
        assert_eq!(settings.port, 4000);
        assert_eq!(settings.bind_addr().to_string(), "127.0.0.1:4000");
        assert!(settings.ytdlp_path.is_none());
        assert!(settings.allowed_origins.is_empty());
    }

    #[test]
    fn test_normalized_origins() {
        let settings = ServerSettings {
            allowed_origins: vec![
                " http://localhost:3000/ ".to_string(),
                "".to_string(),
                "https://tube.example".to_string(),
            ],
            ..Default::default()
        };
        assert_eq!(
            settings.normalized_origins(),
            vec!["http://localhost:3000", "https://tube.example"]
        );
    }
}
