use std::path::{Path, PathBuf};

use pgmstego_pgm::Dimensions;
use serde::{Deserialize, Serialize};

pub const DEFAULT_COVER_PATH: &str = "baboon.pgm";
pub const DEFAULT_SECRET_PATH: &str = "farm.pgm";
pub const DEFAULT_STEGO_PATH: &str = "stego_image_bin.pgm";
pub const DEFAULT_EXTRACTED_PATH: &str = "extracted_secret.pgm";
pub const DEFAULT_WIDTH: u32 = 512;
pub const DEFAULT_HEIGHT: u32 = 512;

/// Errors loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything the pipeline needs to know: four file roles and the fixed
/// image size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Cover image, read as `P2`.
    pub cover_path: PathBuf,
    /// Secret image, read as `P2`.
    pub secret_path: PathBuf,
    /// Stego output, written as `P5`.
    pub stego_path: PathBuf,
    /// Recovered secret, written as `P2`.
    pub extracted_path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Expected secret width when it differs from the cover's.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_width: Option<u32>,
    /// Expected secret height when it differs from the cover's.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_height: Option<u32>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            cover_path: PathBuf::from(DEFAULT_COVER_PATH),
            secret_path: PathBuf::from(DEFAULT_SECRET_PATH),
            stego_path: PathBuf::from(DEFAULT_STEGO_PATH),
            extracted_path: PathBuf::from(DEFAULT_EXTRACTED_PATH),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            secret_width: None,
            secret_height: None,
        }
    }
}

impl PipelineConfig {
    /// Load a JSON configuration file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Cover (and output) dimensions.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Dimensions the secret image is read with.
    pub fn secret_dimensions(&self) -> Dimensions {
        Dimensions::new(
            self.secret_width.unwrap_or(self.width),
            self.secret_height.unwrap_or(self.height),
        )
    }
}
