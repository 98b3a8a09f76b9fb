use bytes::{BufMut, BytesMut};

use crate::error::Result;
use crate::format::Format;
use crate::image::{Dimensions, GrayImage};
use crate::reader::PgmReader;

/// Maximum sample value written to every header.
pub const MAXVAL: u32 = 255;

/// Comment line written after the format tag (without the leading `#`).
pub const COMMENT: &str = "Created by LSB Steganography";

/// A parsed or to-be-written PGM header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub format: Format,
    /// First comment line after the tag, without the leading `#`.
    pub comment: Option<String>,
    pub dimensions: Dimensions,
    pub maxval: u32,
}

impl Header {
    /// The header this crate writes for an image of `dimensions`.
    pub fn new(format: Format, dimensions: Dimensions) -> Self {
        Self {
            format,
            comment: Some(COMMENT.to_string()),
            dimensions,
            maxval: MAXVAL,
        }
    }
}

/// Encode a header.
///
/// Wire format (every line ends with `\n`):
/// ```text
/// P2 | P5
/// # <comment>
/// <width> <height>
/// <maxval>
/// ```
pub fn encode_header(header: &Header, dst: &mut BytesMut) {
    dst.put_slice(header.format.tag().as_bytes());
    dst.put_u8(b'\n');
    if let Some(comment) = &header.comment {
        dst.put_slice(b"# ");
        dst.put_slice(comment.as_bytes());
        dst.put_u8(b'\n');
    }
    put_decimal(dst, header.dimensions.width);
    dst.put_u8(b' ');
    put_decimal(dst, header.dimensions.height);
    dst.put_u8(b'\n');
    put_decimal(dst, header.maxval);
    dst.put_u8(b'\n');
}

/// Encode an image as `P2`: one row per line, samples separated by a single
/// space, no trailing space before the newline.
pub fn encode_ascii(image: &GrayImage, dst: &mut BytesMut) {
    // Up to four bytes per sample ("255" plus separator).
    dst.reserve(image.samples().len() * 4 + 64);
    encode_header(&Header::new(Format::Ascii, image.dimensions()), dst);
    for row in image.rows() {
        for (x, &sample) in row.iter().enumerate() {
            if x > 0 {
                dst.put_u8(b' ');
            }
            put_decimal(dst, u32::from(sample));
        }
        dst.put_u8(b'\n');
    }
}

/// Encode an image as `P5`: header followed by the raw samples.
pub fn encode_binary(image: &GrayImage, dst: &mut BytesMut) {
    dst.reserve(image.samples().len() + 64);
    encode_header(&Header::new(Format::Binary, image.dimensions()), dst);
    dst.put_slice(image.samples());
}

/// Decode an in-memory image of the given variant and expected dimensions.
pub fn decode_image(src: &[u8], format: Format, expected: Dimensions) -> Result<GrayImage> {
    PgmReader::new(src).read_image(format, expected)
}

fn put_decimal(dst: &mut BytesMut, value: u32) {
    let mut digits = [0u8; 10];
    let mut n = value;
    let mut start = digits.len();
    loop {
        start -= 1;
        digits[start] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    dst.put_slice(&digits[start..]);
}
