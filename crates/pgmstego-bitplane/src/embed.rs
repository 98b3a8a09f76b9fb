use pgmstego_pgm::GrayImage;
use tracing::debug;

use crate::mask::hide;

/// Hide `secret`'s high nibbles in `cover`'s low nibbles, in place.
///
/// Both images must have the same dimensions. The caller checks this; a
/// mismatch is a programming error.
pub fn embed(cover: &mut GrayImage, secret: &GrayImage) {
    debug_assert_eq!(
        cover.dimensions(),
        secret.dimensions(),
        "cover and secret must have identical dimensions"
    );
    embed_samples(cover.samples_mut(), secret.samples());
    debug!(dimensions = %cover.dimensions(), "embedded secret nibbles");
}

/// Slice form of [`embed`]. Pairs samples index by index.
pub fn embed_samples(cover: &mut [u8], secret: &[u8]) {
    debug_assert_eq!(cover.len(), secret.len());
    for (c, &s) in cover.iter_mut().zip(secret) {
        *c = hide(*c, s);
    }
}

#[cfg(test)]
mod tests {
    use pgmstego_pgm::Dimensions;

    use super::*;
    use crate::mask::{HIGH_NIBBLE, LOW_NIBBLE};

    const DIMS: Dimensions = Dimensions::new(16, 16);

    fn ramp(seed: u8) -> GrayImage {
        let samples = (0..DIMS.sample_count())
            .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed))
            .collect();
        GrayImage::from_samples(DIMS, samples).unwrap()
    }

    #[test]
    fn uniform_images() {
        let mut cover = GrayImage::filled(DIMS, 0xAB).unwrap();
        let secret = GrayImage::filled(DIMS, 0xCD).unwrap();

        embed(&mut cover, &secret);

        assert!(cover.samples().iter().all(|&s| s == 0xAC));
    }

    #[test]
    fn per_sample_nibbles() {
        let original = ramp(7);
        let secret = ramp(200);
        let mut stego = original.clone();

        embed(&mut stego, &secret);

        for ((&o, &s), &st) in original
            .samples()
            .iter()
            .zip(secret.samples())
            .zip(stego.samples())
        {
            assert_eq!(st & LOW_NIBBLE, (s & HIGH_NIBBLE) >> 4);
            assert_eq!(st & HIGH_NIBBLE, o & HIGH_NIBBLE);
        }
    }

    #[test]
    fn embedding_same_secret_twice_is_stable() {
        let cover = ramp(3);
        let secret = ramp(99);

        let mut first = cover.clone();
        embed(&mut first, &secret);
        let mut second = cover.clone();
        embed(&mut second, &secret);
        assert_eq!(first, second);

        // Re-embedding into an already stego image changes nothing either.
        let mut again = first.clone();
        embed(&mut again, &secret);
        assert_eq!(again, first);
    }

    #[test]
    fn secret_low_nibble_is_discarded() {
        let mut a = [0x00u8, 0xFF];
        let mut b = a;
        embed_samples(&mut a, &[0x50, 0x50]);
        embed_samples(&mut b, &[0x5F, 0x5A]);
        assert_eq!(a, b);
        assert_eq!(a, [0x05, 0xF5]);
    }
}
