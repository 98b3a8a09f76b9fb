use std::fmt;

use crate::error::{PgmError, Result};

/// Width and height of an image in samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of samples in an image of these dimensions.
    ///
    /// Saturates at `usize::MAX`, which no allocation can satisfy.
    pub fn sample_count(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Owned 8-bit grayscale image, row-major, exactly `width * height` samples.
#[derive(Clone, PartialEq, Eq)]
pub struct GrayImage {
    dimensions: Dimensions,
    samples: Vec<u8>,
}

impl GrayImage {
    /// Allocate a zeroed image.
    ///
    /// Returns `PgmError::Allocation` instead of aborting when the buffer
    /// cannot be reserved. The reservation is not a commitment: with memory
    /// overcommit a huge request can still succeed here and fail later, when
    /// the samples are first touched.
    pub fn allocate(dimensions: Dimensions) -> Result<Self> {
        Self::filled(dimensions, 0)
    }

    /// Allocate an image with every sample set to `value`.
    pub fn filled(dimensions: Dimensions, value: u8) -> Result<Self> {
        let len = dimensions.sample_count();
        let mut samples = Vec::new();
        samples
            .try_reserve_exact(len)
            .map_err(|_| PgmError::Allocation { bytes: len })?;
        samples.resize(len, value);
        Ok(Self {
            dimensions,
            samples,
        })
    }

    /// Wrap an existing sample vector.
    pub fn from_samples(dimensions: Dimensions, samples: Vec<u8>) -> Result<Self> {
        if samples.len() != dimensions.sample_count() {
            return Err(PgmError::SampleCountMismatch {
                dimensions,
                len: samples.len(),
            });
        }
        Ok(Self {
            dimensions,
            samples,
        })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        // Zero-width images have no samples, so any non-zero chunk size yields no rows.
        self.samples
            .chunks_exact(self.dimensions.width.max(1) as usize)
    }

    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }
}

impl fmt::Debug for GrayImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrayImage")
            .field("dimensions", &self.dimensions)
            .field("samples", &format_args!("<{} bytes>", self.samples.len()))
            .finish()
    }
}
