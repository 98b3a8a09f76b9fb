use std::io::{ErrorKind, Write};

use bytes::BytesMut;

use crate::codec::{encode_ascii, encode_binary};
use crate::error::{PgmError, Result};
use crate::format::Format;
use crate::image::GrayImage;

/// Writes complete PGM images to any `Write` stream.
pub struct PgmWriter<T> {
    inner: T,
    buf: BytesMut,
}

impl<T: Write> PgmWriter<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            buf: BytesMut::new(),
        }
    }

    /// Write `image` in the given variant and flush.
    pub fn write_image(&mut self, format: Format, image: &GrayImage) -> Result<()> {
        self.buf.clear();
        match format {
            Format::Ascii => encode_ascii(image, &mut self.buf),
            Format::Binary => encode_binary(image, &mut self.buf),
        }

        let mut offset = 0usize;
        while offset < self.buf.len() {
            match self.inner.write(&self.buf[offset..]) {
                Ok(0) => return Err(PgmError::Io(std::io::Error::from(ErrorKind::WriteZero))),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(PgmError::Io(err)),
            }
        }

        self.flush()
    }

    /// Write `image` as `P2`.
    pub fn write_ascii(&mut self, image: &GrayImage) -> Result<()> {
        self.write_image(Format::Ascii, image)
    }

    /// Write `image` as `P5`.
    pub fn write_binary(&mut self, image: &GrayImage) -> Result<()> {
        self.write_image(Format::Binary, image)
    }

    /// Flush the underlying stream.
    pub fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(PgmError::Io(err)),
            }
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

    /// Consume the writer and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}
