use std::path::PathBuf;

use crate::image::Dimensions;

/// Coarse classification of codec failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A file could not be opened, created, read or written.
    Io,
    /// The header does not describe a supported PGM variant.
    Format,
    /// Declared and expected dimensions disagree.
    DimensionMismatch,
    /// The file ended before all declared data was read.
    TruncatedData,
    /// An image buffer could not be obtained.
    AllocationFailure,
}

/// Errors that can occur while reading or writing PGM images.
#[derive(Debug, thiserror::Error)]
pub enum PgmError {
    /// The input file could not be opened.
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The output file could not be created.
    #[error("cannot create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An I/O error occurred while reading or writing image data.
    #[error("pgm I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The header starts with an unexpected format tag.
    #[error("invalid PGM format tag (expected {expected}, found {found:?})")]
    InvalidTag {
        expected: &'static str,
        found: String,
    },

    /// A header field or sample is not a decimal integer.
    #[error("invalid {field} value {token:?}")]
    InvalidToken { field: &'static str, token: String },

    /// The header declares a maximum sample value outside the 8-bit range.
    #[error("unsupported maxval {0} (expected 1..=255)")]
    UnsupportedMaxval(u32),

    /// The header declares dimensions other than the expected ones.
    #[error("image dimensions mismatch (expected {expected}, found {found})")]
    DimensionMismatch {
        expected: Dimensions,
        found: Dimensions,
    },

    /// The file ended inside the header.
    #[error("unexpected end of file while reading {0}")]
    UnexpectedEof(&'static str),

    /// The file ended before all declared samples were read.
    #[error("truncated image data ({read} of {expected} samples)")]
    Truncated { expected: usize, read: usize },

    /// A sample vector does not match the image dimensions.
    #[error("sample buffer of {len} bytes does not fit a {dimensions} image")]
    SampleCountMismatch { dimensions: Dimensions, len: usize },

    /// The sample buffer could not be allocated.
    #[error("cannot allocate {bytes} bytes for image buffer")]
    Allocation { bytes: usize },
}

impl PgmError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PgmError::Open { .. } | PgmError::Create { .. } | PgmError::Io(_) => ErrorKind::Io,
            PgmError::InvalidTag { .. }
            | PgmError::InvalidToken { .. }
            | PgmError::UnsupportedMaxval(_) => ErrorKind::Format,
            PgmError::DimensionMismatch { .. } | PgmError::SampleCountMismatch { .. } => {
                ErrorKind::DimensionMismatch
            }
            PgmError::UnexpectedEof(_) | PgmError::Truncated { .. } => ErrorKind::TruncatedData,
            PgmError::Allocation { .. } => ErrorKind::AllocationFailure,
        }
    }
}

pub type Result<T> = std::result::Result<T, PgmError>;
