//! 8-bit grayscale PGM codec.
//!
//! Reads and writes Portable Gray Map images in both variants:
//! - `P2`: textual header followed by whitespace-separated decimal samples
//! - `P5`: textual header followed by raw sample bytes
//!
//! Dimensions are always supplied by the caller. A file whose header declares
//! anything else is rejected before any sample buffer is allocated.

pub mod codec;
pub mod error;
pub mod file;
pub mod format;
pub mod image;
pub mod reader;
pub mod writer;

pub use codec::{decode_image, encode_ascii, encode_binary, encode_header, Header, COMMENT, MAXVAL};
pub use error::{ErrorKind, PgmError, Result};
pub use file::{
    read_header, read_image, read_image_binary, read_image_into, write_image_ascii,
    write_image_binary,
};
pub use format::Format;
pub use image::{Dimensions, GrayImage};
pub use reader::PgmReader;
pub use writer::PgmWriter;
