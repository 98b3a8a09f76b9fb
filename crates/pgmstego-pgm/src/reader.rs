use std::io::{ErrorKind, Read};

use bytes::{Buf, BytesMut};
use tracing::debug;

use crate::codec::Header;
use crate::error::{PgmError, Result};
use crate::format::Format;
use crate::image::{Dimensions, GrayImage};

const INITIAL_BUFFER_CAPACITY: usize = 8 * 1024;
const READ_CHUNK_SIZE: usize = 8 * 1024;

/// Reads PGM images from any `Read` stream.
///
/// Input is pulled in chunks into an internal buffer and consumed through a
/// small text cursor: whitespace skipping, comment-line skipping and
/// whitespace-delimited tokens. Raw `P5` samples are copied straight out of
/// the same buffer.
pub struct PgmReader<T> {
    inner: T,
    buf: BytesMut,
    token: Vec<u8>,
}

impl<T: Read> PgmReader<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            token: Vec::with_capacity(16),
        }
    }

    /// Read a `P2` or `P5` header without checking its dimensions.
    pub fn read_header(&mut self) -> Result<Header> {
        self.read_header_inner(None)
    }

    /// Read a complete image of the given variant.
    ///
    /// The header must declare exactly `expected`; otherwise
    /// `PgmError::DimensionMismatch` is returned and no sample buffer is
    /// allocated.
    pub fn read_image(&mut self, format: Format, expected: Dimensions) -> Result<GrayImage> {
        let header = self.read_header_expecting(format, expected)?;
        let mut image = GrayImage::allocate(header.dimensions)?;
        self.read_samples_into(&header, image.samples_mut())?;
        Ok(image)
    }

    /// Read an image into a caller-allocated buffer whose dimensions are the
    /// expected ones.
    ///
    /// On `DimensionMismatch` the buffer is left untouched. On `Truncated` its
    /// contents are unspecified.
    pub fn read_into(&mut self, format: Format, image: &mut GrayImage) -> Result<Header> {
        let header = self.read_header_expecting(format, image.dimensions())?;
        self.read_samples_into(&header, image.samples_mut())?;
        Ok(header)
    }

    /// Read the samples that follow `header` into `out`.
    ///
    /// `out` must hold exactly `header.dimensions.sample_count()` samples.
    pub fn read_samples_into(&mut self, header: &Header, out: &mut [u8]) -> Result<()> {
        let expected = header.dimensions.sample_count();
        if out.len() != expected {
            return Err(PgmError::SampleCountMismatch {
                dimensions: header.dimensions,
                len: out.len(),
            });
        }
        match header.format {
            Format::Ascii => self.read_ascii_samples(out),
            Format::Binary => self.read_binary_samples(out),
        }
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    fn read_header_expecting(&mut self, format: Format, expected: Dimensions) -> Result<Header> {
        let header = self.read_header_inner(Some(format))?;
        if header.dimensions != expected {
            return Err(PgmError::DimensionMismatch {
                expected,
                found: header.dimensions,
            });
        }
        Ok(header)
    }

    fn read_header_inner(&mut self, expected: Option<Format>) -> Result<Header> {
        let tag = self.next_token_string("format tag")?;
        let format = match expected {
            Some(format) if tag == format.tag() => format,
            Some(format) => {
                return Err(PgmError::InvalidTag {
                    expected: format.tag(),
                    found: tag,
                })
            }
            None => Format::from_tag(&tag).ok_or(PgmError::InvalidTag {
                expected: "P2 or P5",
                found: tag,
            })?,
        };

        let comment = self.skip_comments()?;
        let width = self.next_u32("width")?;
        let height = self.next_u32("height")?;
        let maxval = self.next_u32("maxval")?;
        if maxval == 0 || maxval > 255 {
            return Err(PgmError::UnsupportedMaxval(maxval));
        }

        let header = Header {
            format,
            comment,
            dimensions: Dimensions::new(width, height),
            maxval,
        };
        debug!(
            format = %header.format,
            dimensions = %header.dimensions,
            maxval,
            "parsed pgm header"
        );
        Ok(header)
    }

    fn read_ascii_samples(&mut self, out: &mut [u8]) -> Result<()> {
        let expected = out.len();
        for (read, slot) in out.iter_mut().enumerate() {
            if !self.next_token()? {
                return Err(PgmError::Truncated { expected, read });
            }
            let value: i64 = parse_token(&self.token, "sample")?;
            // Samples are truncated to their low 8 bits.
            *slot = value as u8;
        }
        Ok(())
    }

    fn read_binary_samples(&mut self, out: &mut [u8]) -> Result<()> {
        // Exactly one whitespace byte separates maxval from the raster.
        match self.next_byte()? {
            Some(b) if b.is_ascii_whitespace() => {}
            Some(b) => {
                return Err(PgmError::InvalidToken {
                    field: "raster separator",
                    token: char::from(b).to_string(),
                })
            }
            None => {
                return Err(PgmError::Truncated {
                    expected: out.len(),
                    read: 0,
                })
            }
        }

        let mut filled = 0usize;
        while filled < out.len() {
            if self.buf.is_empty() && !self.fill()? {
                return Err(PgmError::Truncated {
                    expected: out.len(),
                    read: filled,
                });
            }
            let n = self.buf.len().min(out.len() - filled);
            out[filled..filled + n].copy_from_slice(&self.buf[..n]);
            self.buf.advance(n);
            filled += n;
        }
        Ok(())
    }

    /// Skip whitespace and any number of `#` comment lines. Returns the first
    /// comment's text.
    fn skip_comments(&mut self) -> Result<Option<String>> {
        let mut first = None;
        loop {
            self.skip_whitespace()?;
            if self.peek_byte()? != Some(b'#') {
                return Ok(first);
            }
            self.buf.advance(1);

            let mut line = Vec::new();
            while let Some(b) = self.next_byte()? {
                if b == b'\n' {
                    break;
                }
                line.push(b);
            }
            if first.is_none() {
                first = Some(String::from_utf8_lossy(&line).trim().to_string());
            }
        }
    }

    fn next_u32(&mut self, field: &'static str) -> Result<u32> {
        if !self.next_token()? {
            return Err(PgmError::UnexpectedEof(field));
        }
        parse_token(&self.token, field)
    }

    fn next_token_string(&mut self, field: &'static str) -> Result<String> {
        if !self.next_token()? {
            return Err(PgmError::UnexpectedEof(field));
        }
        Ok(String::from_utf8_lossy(&self.token).into_owned())
    }

    /// Load the next whitespace-delimited token into `self.token`.
    ///
    /// Returns `false` at end of input. The delimiter after the token is left
    /// unconsumed.
    fn next_token(&mut self) -> Result<bool> {
        self.skip_whitespace()?;
        self.token.clear();
        while let Some(b) = self.peek_byte()? {
            if b.is_ascii_whitespace() {
                break;
            }
            self.token.push(b);
            self.buf.advance(1);
        }
        Ok(!self.token.is_empty())
    }

    fn skip_whitespace(&mut self) -> Result<()> {
        while let Some(b) = self.peek_byte()? {
            if !b.is_ascii_whitespace() {
                break;
            }
            self.buf.advance(1);
        }
        Ok(())
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        let b = self.peek_byte()?;
        if b.is_some() {
            self.buf.advance(1);
        }
        Ok(b)
    }

    fn peek_byte(&mut self) -> Result<Option<u8>> {
        if self.buf.is_empty() && !self.fill()? {
            return Ok(None);
        }
        Ok(Some(self.buf[0]))
    }

    /// Pull the next chunk from the stream. Returns `false` at EOF.
    fn fill(&mut self) -> Result<bool> {
        let mut chunk = [0u8; READ_CHUNK_SIZE];
        loop {
            match self.inner.read(&mut chunk) {
                Ok(0) => return Ok(false),
                Ok(n) => {
                    self.buf.extend_from_slice(&chunk[..n]);
                    return Ok(true);
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(PgmError::Io(err)),
            }
        }
    }
}

fn parse_token<N: std::str::FromStr>(token: &[u8], field: &'static str) -> Result<N> {
    std::str::from_utf8(token)
        .ok()
        .and_then(|text| text.parse().ok())
        .ok_or_else(|| PgmError::InvalidToken {
            field,
            token: String::from_utf8_lossy(token).into_owned(),
        })
}
