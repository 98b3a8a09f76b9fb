//! Staged embed/extract driver.
//!
//! Stages run strictly in order:
//!
//! ```text
//! AllocateCover -> ReadCover -> AllocateSecret -> ReadSecret -> VerifyDimensions
//!   -> embed -> WriteStego -> AllocateOutput -> extract -> WriteExtracted
//! ```
//!
//! Embedding and extraction cannot fail. Every other stage maps to its own
//! exit code. Image buffers are owned values, so whichever stage fails, the
//! buffers allocated before it are released exactly once on return.

use std::path::{Path, PathBuf};

use pgmstego_bitplane::{embed, extract_into};
use pgmstego_pgm::{
    read_image_binary, read_image_into, write_image_ascii, write_image_binary, Dimensions,
    Format, GrayImage, PgmError,
};
use tracing::{debug, info};

use crate::config::PipelineConfig;

/// A pipeline stage that can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    AllocateCover,
    ReadCover,
    AllocateSecret,
    ReadSecret,
    VerifyDimensions,
    WriteStego,
    AllocateOutput,
    WriteExtracted,
    /// Reading a previously written stego image (extract-only runs).
    ReadStego,
}

impl Stage {
    /// Process exit status reported when this stage fails.
    pub fn exit_code(self) -> i32 {
        match self {
            Stage::AllocateCover => -1,
            Stage::ReadCover => -2,
            Stage::AllocateSecret => -3,
            Stage::ReadSecret => -4,
            Stage::VerifyDimensions => -5,
            Stage::WriteStego => -6,
            Stage::AllocateOutput => -7,
            Stage::WriteExtracted => -8,
            Stage::ReadStego => -9,
        }
    }

    /// What the stage does, for diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            Stage::AllocateCover => "allocating cover image",
            Stage::ReadCover => "reading cover image",
            Stage::AllocateSecret => "allocating secret image",
            Stage::ReadSecret => "reading secret image",
            Stage::VerifyDimensions => "verifying image dimensions",
            Stage::WriteStego => "writing stego image",
            Stage::AllocateOutput => "allocating output image",
            Stage::WriteExtracted => "writing extracted secret",
            Stage::ReadStego => "reading stego image",
        }
    }
}

/// A failed stage and the codec error behind it.
#[derive(Debug, thiserror::Error)]
#[error("{} failed: {source}", .stage.describe())]
pub struct PipelineError {
    pub stage: Stage,
    pub source: PgmError,
}

impl PipelineError {
    pub fn new(stage: Stage, source: PgmError) -> Self {
        Self { stage, source }
    }

    pub fn exit_code(&self) -> i32 {
        self.stage.exit_code()
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub dimensions: Dimensions,
    pub stego_path: Option<PathBuf>,
    pub extracted_path: Option<PathBuf>,
}

/// Run the full pipeline described by `config`.
pub fn run(config: &PipelineConfig) -> Result<PipelineReport> {
    let stego = hide(
        &config.cover_path,
        &config.secret_path,
        &config.stego_path,
        config.dimensions(),
        config.secret_dimensions(),
    )?;
    reveal(&stego, &config.extracted_path)?;

    info!(
        dimensions = %stego.dimensions(),
        stego = ?config.stego_path,
        extracted = ?config.extracted_path,
        "steganography pipeline completed"
    );
    Ok(PipelineReport {
        dimensions: stego.dimensions(),
        stego_path: Some(config.stego_path.clone()),
        extracted_path: Some(config.extracted_path.clone()),
    })
}

/// Embed `secret` into `cover` and write the stego image as `P5`.
pub fn embed_files(
    cover: &Path,
    secret: &Path,
    stego_out: &Path,
    dimensions: Dimensions,
) -> Result<PipelineReport> {
    let stego = hide(cover, secret, stego_out, dimensions, dimensions)?;
    Ok(PipelineReport {
        dimensions: stego.dimensions(),
        stego_path: Some(stego_out.to_path_buf()),
        extracted_path: None,
    })
}

/// Read a `P5` stego image and write its hidden nibbles as `P2`.
pub fn extract_file(
    stego_in: &Path,
    extracted_out: &Path,
    dimensions: Dimensions,
) -> Result<PipelineReport> {
    enter(Stage::ReadStego);
    let stego = read_image_binary(stego_in, dimensions.width, dimensions.height)
        .map_err(failed(Stage::ReadStego))?;
    reveal(&stego, extracted_out)?;
    Ok(PipelineReport {
        dimensions,
        stego_path: None,
        extracted_path: Some(extracted_out.to_path_buf()),
    })
}

/// Allocate-Cover through Write-Stego. Returns the stego image.
fn hide(
    cover_path: &Path,
    secret_path: &Path,
    stego_path: &Path,
    dimensions: Dimensions,
    secret_dimensions: Dimensions,
) -> Result<GrayImage> {
    enter(Stage::AllocateCover);
    let mut cover = GrayImage::allocate(dimensions).map_err(failed(Stage::AllocateCover))?;

    enter(Stage::ReadCover);
    read_image_into(cover_path, Format::Ascii, &mut cover).map_err(failed(Stage::ReadCover))?;

    enter(Stage::AllocateSecret);
    let mut secret =
        GrayImage::allocate(secret_dimensions).map_err(failed(Stage::AllocateSecret))?;

    enter(Stage::ReadSecret);
    read_image_into(secret_path, Format::Ascii, &mut secret)
        .map_err(failed(Stage::ReadSecret))?;

    enter(Stage::VerifyDimensions);
    if cover.dimensions() != secret.dimensions() {
        return Err(PipelineError::new(
            Stage::VerifyDimensions,
            PgmError::DimensionMismatch {
                expected: cover.dimensions(),
                found: secret.dimensions(),
            },
        ));
    }

    embed(&mut cover, &secret);
    drop(secret);

    enter(Stage::WriteStego);
    write_image_binary(stego_path, &cover).map_err(failed(Stage::WriteStego))?;
    Ok(cover)
}

/// Allocate-Output through Write-Extracted.
fn reveal(stego: &GrayImage, extracted_path: &Path) -> Result<()> {
    enter(Stage::AllocateOutput);
    let mut extracted =
        GrayImage::allocate(stego.dimensions()).map_err(failed(Stage::AllocateOutput))?;

    extract_into(stego, &mut extracted);

    enter(Stage::WriteExtracted);
    write_image_ascii(extracted_path, &extracted).map_err(failed(Stage::WriteExtracted))
}

fn enter(stage: Stage) {
    debug!(stage = stage.describe(), "pipeline stage");
}

fn failed(stage: Stage) -> impl FnOnce(PgmError) -> PipelineError {
    move |source| PipelineError::new(stage, source)
}
