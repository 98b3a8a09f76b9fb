use pgmstego_pgm::{GrayImage, Result};
use tracing::debug;

use crate::mask::reveal;

/// Recover the hidden image from `stego` into a newly allocated image.
///
/// Each output sample's high nibble is the stego sample's low nibble; the low
/// nibble is zero.
pub fn extract(stego: &GrayImage) -> Result<GrayImage> {
    let mut out = GrayImage::allocate(stego.dimensions())?;
    extract_into(stego, &mut out);
    Ok(out)
}

/// Recover the hidden image into a caller-allocated image of the same
/// dimensions.
pub fn extract_into(stego: &GrayImage, out: &mut GrayImage) {
    debug_assert_eq!(stego.dimensions(), out.dimensions());
    extract_samples(stego.samples(), out.samples_mut());
    debug!(dimensions = %stego.dimensions(), "extracted secret nibbles");
}

/// Slice form of [`extract_into`].
pub fn extract_samples(stego: &[u8], out: &mut [u8]) {
    debug_assert_eq!(stego.len(), out.len());
    for (o, &s) in out.iter_mut().zip(stego) {
        *o = reveal(s);
    }
}
