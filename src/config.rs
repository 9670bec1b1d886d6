//! Portal Backstage configuration management

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main Portal Backstage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Cross-origin policy
    pub cors: CorsConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Cross-origin configuration
///
/// An empty origin list mirrors whatever origin the browser sends, which is
/// only acceptable for local prototype deployments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allowed origins (empty = any)
    pub allowed_origins: Vec<String>,

    /// Allow cookies and auth headers on cross-origin requests
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            allow_credentials: true,
        }
    }
}

impl PortalConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load from an explicit path, or from the default location if present
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "Loading default configuration");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Default config file location (`<config_dir>/portal-backstage/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs_next::config_dir().map(|p| p.join("portal-backstage").join("config.toml"))
    }

    /// Render as pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = PortalConfig::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.cors.allowed_origins.is_empty());
        assert!(config.cors.allow_credentials);
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = PortalConfig::from_toml("[server]\nport = 9100\n").unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.cors.allow_credentials);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = PortalConfig::from_toml("[server\nport = ").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[cors]\nallowed_origins = [\"http://localhost:5173\"]\nallow_credentials = false\n",
        )
        .unwrap();

        let config = PortalConfig::resolve(Some(path.as_path())).unwrap();
        assert_eq!(config.cors.allowed_origins, vec!["http://localhost:5173"]);
        assert!(!config.cors.allow_credentials);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = PortalConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let rendered = PortalConfig::default().to_toml().unwrap();
        let parsed = PortalConfig::from_toml(&rendered).unwrap();
        assert_eq!(parsed.server.port, 8000);
    }
}
