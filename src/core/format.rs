//! Configuration format tags.
//!
//! A `Format` selects both the envelope parser the decrypt backend uses and
//! the deserializer applied to the plaintext.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use tracing::trace;

use crate::error::ParseError;

/// Supported configuration formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Tag passed to the decrypt backend (`json` or `yaml`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Infer the format from a file extension.
    ///
    /// Only the final extension counts, so `config.enc.yaml` is YAML.
    pub fn detect(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }

    /// Deserialize plaintext bytes in this format.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` on a syntax error or schema mismatch.
    pub fn parse<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, ParseError> {
        trace!(format = self.as_str(), len = bytes.len(), "deserializing");
        match self {
            Self::Json => Ok(serde_json::from_slice(bytes)?),
            Self::Yaml => Ok(serde_yaml::from_slice(bytes)?),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!("unsupported format: {}", other)),
        }
    }
}
