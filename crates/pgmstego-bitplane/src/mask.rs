//! Bit masks shared by embedding and extraction.

/// Bits 4-7 of a sample.
pub const HIGH_NIBBLE: u8 = 0xF0;

/// Bits 0-3 of a sample.
pub const LOW_NIBBLE: u8 = 0x0F;

/// Distance between the two nibbles.
pub const NIBBLE_SHIFT: u32 = 4;

/// Keep the cover's high nibble and store `secret`'s high nibble below it.
#[inline]
pub fn hide(cover: u8, secret: u8) -> u8 {
    (cover & HIGH_NIBBLE) | ((secret & HIGH_NIBBLE) >> NIBBLE_SHIFT)
}

/// Recover the hidden nibble into the high bits.
#[inline]
pub fn reveal(stego: u8) -> u8 {
    (stego & LOW_NIBBLE) << NIBBLE_SHIFT
}
