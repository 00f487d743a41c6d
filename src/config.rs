//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a csstoc.toml, and if present we load settings from there.
//! This provides the outline markers and the file extensions to scan.

use crate::error::{Error, Result};
use crate::options::{PartialOptions, DEFAULT_BLOCK_IDENTIFIER, DEFAULT_PAD_DEPTH_CHAR};
use facet::Facet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "csstoc.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from csstoc.toml or falling back to defaults.
pub struct Config {
    #[facet(default = DEFAULT_PAD_DEPTH_CHAR.to_string())]
    /// Indentation unit repeated once per heading level.
    pub pad_depth_char: String,
    #[facet(default = DEFAULT_BLOCK_IDENTIFIER.to_string())]
    /// Marker identifying the placeholder comment.
    pub block_identifier: String,
    #[facet(default = vec!["css".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pad_depth_char: DEFAULT_PAD_DEPTH_CHAR.to_string(),
            block_identifier: DEFAULT_BLOCK_IDENTIFIER.to_string(),
            file_extensions: vec!["css".to_string()],
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from csstoc.toml if present and valid, else use defaults.
    pub fn load() -> Self {
        Self::load_or_default(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults when it is missing or invalid.
    ///
    /// A file that exists but cannot be used is reported at warn level.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::from_existing(path) {
            Ok(Some(config)) => config,
            Ok(None) => {
                debug!("no {} found, using default configuration", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("ignoring configuration, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Load configuration from `path` if the file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not valid
    /// configuration.
    pub fn from_existing(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::from_path(path).map(Some)
    }

    /// Load configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid configuration.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents).map_err(|message| Error::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse configuration text; omitted keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns the decoder message if the text is not valid configuration.
    pub fn from_toml(contents: &str) -> std::result::Result<Self, String> {
        facet_toml::from_str::<Self>(contents).map_err(|e| e.to_string())
    }

    #[must_use]
    /// The option layer this configuration contributes.
    pub fn partial_options(&self) -> PartialOptions {
        PartialOptions {
            pad_depth_char: Some(self.pad_depth_char.clone()),
            block_identifier: Some(self.block_identifier.clone()),
            ..PartialOptions::default()
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
