//! PGM variants.
//!
//! Both variants share the same textual header; they differ only in how the
//! samples after the maxval line are stored.

use std::fmt;

/// PGM encoding variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// `P2`: decimal samples, one row per line.
    Ascii,
    /// `P5`: raw sample bytes with no separators.
    Binary,
}

impl Format {
    /// The two-character tag that opens the header.
    pub fn tag(self) -> &'static str {
        match self {
            Format::Ascii => "P2",
            Format::Binary => "P5",
        }
    }

    /// Parse a header tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "P2" => Some(Format::Ascii),
            "P5" => Some(Format::Binary),
            _ => None,
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Format::Ascii => "ascii",
            Format::Binary => "binary",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
