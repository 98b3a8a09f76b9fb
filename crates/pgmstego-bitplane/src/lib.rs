//! Nibble bit-plane transform.
//!
//! The high four bits of each secret sample replace the low four bits of the
//! matching cover sample. Extraction moves those bits back to the high
//! nibble and leaves the low nibble zero, so only 4 bits per sample survive.

pub mod embed;
pub mod extract;
pub mod mask;

pub use embed::{embed, embed_samples};
pub use extract::{extract, extract_into, extract_samples};
pub use mask::{HIGH_NIBBLE, LOW_NIBBLE, NIBBLE_SHIFT};
