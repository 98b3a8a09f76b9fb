//! Path-based entry points.
//!
//! Open and create failures carry the offending path. Output files are
//! created (or truncated) before any data is written; a failed write leaves
//! whatever was written so far.

use std::fs::File;
use std::path::Path;

use tracing::info;

use crate::codec::Header;
use crate::error::{PgmError, Result};
use crate::format::Format;
use crate::image::{Dimensions, GrayImage};
use crate::reader::PgmReader;
use crate::writer::PgmWriter;

/// Read a `P2` image that must measure exactly `width` x `height`.
pub fn read_image(path: impl AsRef<Path>, width: u32, height: u32) -> Result<GrayImage> {
    open(path.as_ref())?.read_image(Format::Ascii, Dimensions::new(width, height))
}

/// Read a `P5` image that must measure exactly `width` x `height`.
pub fn read_image_binary(path: impl AsRef<Path>, width: u32, height: u32) -> Result<GrayImage> {
    open(path.as_ref())?.read_image(Format::Binary, Dimensions::new(width, height))
}

/// Read an image of the given variant into a caller-allocated buffer.
pub fn read_image_into(
    path: impl AsRef<Path>,
    format: Format,
    image: &mut GrayImage,
) -> Result<Header> {
    open(path.as_ref())?.read_into(format, image)
}

/// Read only the header of a `P2` or `P5` file.
pub fn read_header(path: impl AsRef<Path>) -> Result<Header> {
    open(path.as_ref())?.read_header()
}

/// Write `image` as `P2`.
pub fn write_image_ascii(path: impl AsRef<Path>, image: &GrayImage) -> Result<()> {
    write(path.as_ref(), Format::Ascii, image)
}

/// Write `image` as `P5`.
pub fn write_image_binary(path: impl AsRef<Path>, image: &GrayImage) -> Result<()> {
    write(path.as_ref(), Format::Binary, image)
}

fn open(path: &Path) -> Result<PgmReader<File>> {
    let file = File::open(path).map_err(|source| PgmError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(PgmReader::new(file))
}

fn write(path: &Path, format: Format, image: &GrayImage) -> Result<()> {
    let file = File::create(path).map_err(|source| PgmError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    PgmWriter::new(file).write_image(format, image)?;
    info!(
        ?path,
        format = format.name(),
        dimensions = %image.dimensions(),
        "wrote pgm image"
    );
    Ok(())
}
