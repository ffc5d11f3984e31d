//! # Configuration
//!
//! Optional TOML configuration file.
//!
//! ```toml
//! catalog = "demos/catalog.json"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//! ```
//!
//! Precedence is CLI flag, then configuration file, then built-in default.

use certquiz_core::QuizError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// =============================================================================
// DEFAULTS
// =============================================================================

/// Configuration file looked up in the working directory when `--config`
/// is not given.
pub const DEFAULT_CONFIG_PATH: &str = "certquiz.toml";

/// Catalog used when neither the CLI nor the configuration names one.
pub const DEFAULT_CATALOG_PATH: &str = "catalog.json";

/// Default bind host for the HTTP adapter.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port for the HTTP adapter.
pub const DEFAULT_PORT: u16 = 8080;

/// Maximum accepted size of a configuration file (64 KB).
const MAX_CONFIG_BYTES: u64 = 64 * 1024;

// =============================================================================
// FILE CONFIGURATION
// =============================================================================

/// Contents of `certquiz.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Path to the catalog JSON.
    pub catalog: Option<PathBuf>,
    /// HTTP adapter settings.
    pub server: ServerSection,
}

/// The `[server]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl FileConfig {
    /// Parse configuration text.
    pub fn parse(text: &str) -> Result<Self, QuizError> {
        toml::from_str(text)
            .map_err(|e| QuizError::Config(format!("Malformed configuration: {}", e)))
    }

    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, `certquiz.toml` in the
    /// working directory is used if present.
    pub fn load(explicit: Option<&Path>) -> Result<Self, QuizError> {
        match explicit {
            Some(path) => Self::load_required(path),
            None => Self::load_optional(Path::new(DEFAULT_CONFIG_PATH)),
        }
    }

    /// Load a file that must exist.
    pub fn load_required(path: &Path) -> Result<Self, QuizError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            QuizError::Config(format!(
                "Cannot read configuration '{}': {}",
                path.display(),
                e
            ))
        })?;
        if metadata.len() > MAX_CONFIG_BYTES {
            return Err(QuizError::Config(format!(
                "Configuration '{}' is {} bytes, maximum is {}",
                path.display(),
                metadata.len(),
                MAX_CONFIG_BYTES
            )));
        }

        let text = std::fs::read_to_string(path).map_err(|e| {
            QuizError::Config(format!(
                "Cannot read configuration '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config = Self::parse(&text)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Load a file if it exists, falling back to the empty configuration.
    pub fn load_optional(path: &Path) -> Result<Self, QuizError> {
        if path.exists() {
            Self::load_required(path)
        } else {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }
}

// =============================================================================
// RESOLVED SETTINGS
// =============================================================================

/// Settings after applying precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub catalog: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Settings {
    /// Merge CLI overrides over the file configuration over defaults.
    #[must_use]
    pub fn resolve(
        file: &FileConfig,
        catalog: Option<PathBuf>,
        host: Option<String>,
        port: Option<u16>,
    ) -> Self {
        Self {
            catalog: catalog
                .or_else(|| file.catalog.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH)),
            host: host
                .or_else(|| file.server.host.clone())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: port.or(file.server.port).unwrap_or(DEFAULT_PORT),
        }
    }

    /// `host:port` for binding.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
