//! Hide one 8-bit grayscale PGM image inside another.
//!
//! The secret image's high nibbles are stored in the cover image's low
//! nibbles. The result is written as a binary PGM; the hidden nibbles are then
//! recovered into an ASCII PGM.
//!
//! # Crate Structure
//!
//! - [`pgm`] — PGM codec (`P2` and `P5`, fixed dimensions)
//! - [`bitplane`] — Nibble embedding and extraction
//! - [`config`] — Pipeline configuration
//! - [`pipeline`] — Staged driver with per-stage exit codes

/// Re-export codec types.
pub mod pgm {
    pub use pgmstego_pgm::*;
}

/// Re-export transform functions.
pub mod bitplane {
    pub use pgmstego_bitplane::*;
}

pub mod config;
pub mod pipeline;

pub use config::{ConfigError, PipelineConfig};
pub use pipeline::{PipelineError, PipelineReport, Stage};
