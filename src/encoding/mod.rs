// SPDX-FileCopyrightText: The knobio authors
// SPDX-License-Identifier: MPL-2.0

//! Wire-level encoding schemes of relative rotary encoders.
//!
//! Each hardware family packs the direction and magnitude of one encoder
//! tick differently into a single 7-bit sample. The formulas in this module
//! are bit-exact: superficially similar schemes differ in their breakpoints
//! and sign conventions, and the hardware depends on the difference.

use strum::{Display, EnumCount, EnumIter};

#[cfg(test)]
mod tests;

/// A single 7-bit wire sample as received from a control surface.
///
/// Construction clamps out-of-range raw bytes into `[0, 127]`. The decoders
/// are total functions over the 7-bit domain, so clamping at this boundary
/// keeps semantically meaningless inputs from propagating.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display, derive_more::Into,
)]
pub struct ControlByte(u8);

impl ControlByte {
    pub const MIN: Self = Self(0x00);
    pub const MAX: Self = Self(0x7f);

    #[must_use]
    pub const fn new(raw: u8) -> Self {
        if raw > 0x7f {
            Self(0x7f)
        } else {
            Self(raw)
        }
    }

    /// The raw 7-bit sample.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl From<u8> for ControlByte {
    fn from(raw: u8) -> Self {
        Self::new(raw)
    }
}

/// Relative encoding scheme of a rotary encoder.
///
/// Tags one `decode`/`encode` formula pair per hardware family. The set is
/// closed and dispatch is an exhaustive `match`, so adding a scheme is a
/// compile-time checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
pub enum Encoding {
    /// Fallback decoder of absolute controls.
    ///
    /// Breaks at 61 instead of 64: samples `0..=61` are positive deltas,
    /// `62..=127` map to `[-66, -1]`. This historical quirk is intentionally
    /// kept distinct from [`Encoding::TwosComplement`] — legacy encoders
    /// bound to absolute controls rely on it.
    Absolute,

    /// Two's complement: `0..=63` are positive deltas, `64..=127` map to
    /// `[-64, -1]` via `sample - 128`.
    TwosComplement,

    /// Offset binary: plain affine shift around the 64 midpoint, no
    /// wraparound.
    OffsetBinary,

    /// Signed bit: bit 6 carries the sign, the lower 6 bits the magnitude.
    SignedBit,

    /// Signed bit with the direction of turn reversed: samples above 64
    /// decode to *negative* deltas of magnitude `sample - 64`.
    SignedBit2,

    /// "Relative 2" mode: like [`Encoding::SignedBit2`] but breaking at
    /// 0x41, so a sample of 0x40 still decodes as a positive delta.
    Relative2,

    /// "Relative 4" mode: samples above 0x40 are positive deltas, samples
    /// `0..=0x40` decode to their negation.
    Relative4,
}

impl Encoding {
    /// Interprets a wire sample as a signed step count.
    ///
    /// Pure and total over the 7-bit domain.
    #[must_use]
    pub const fn decode(self, control: ControlByte) -> i32 {
        let c = control.raw() as i32;
        match self {
            Self::Absolute => {
                if c <= 61 {
                    c
                } else {
                    c - 128
                }
            }
            Self::TwosComplement => {
                if c < 64 {
                    c
                } else {
                    c - 128
                }
            }
            Self::OffsetBinary => c - 64,
            Self::SignedBit => {
                if c == 64 {
                    0
                } else if c > 64 {
                    c - 64
                } else {
                    -c
                }
            }
            Self::SignedBit2 => {
                if c < 64 {
                    c
                } else {
                    64 - c
                }
            }
            Self::Relative2 => {
                if c < 0x41 {
                    c
                } else {
                    0x40 - c
                }
            }
            Self::Relative4 => {
                if c > 0x40 {
                    c - 0x40
                } else {
                    -c
                }
            }
        }
    }

    /// Inverse of [`Encoding::decode`] over the scheme's representable
    /// delta range; the resulting sample is clamped into the 7-bit domain.
    ///
    /// Representable ranges:
    /// - `Absolute`: `[-66, 61]`
    /// - `TwosComplement`, `OffsetBinary`: `[-64, 63]`
    /// - `SignedBit`, `SignedBit2`: `[-63, 63]`
    /// - `Relative2`: `[0, 64]` (the historical encode maps negative deltas
    ///   onto the positive half of the wire domain and does not invert
    ///   `decode` for them)
    /// - `Relative4`: every non-zero delta in `[-64, 63]` (`encode(0)`
    ///   collides with `-64`)
    #[must_use]
    pub const fn encode(self, delta: i32) -> ControlByte {
        // Widen before the shift arithmetic so that even absurd deltas
        // cannot overflow before the final clamp.
        let delta = delta as i64;
        let c = match self {
            Self::Absolute | Self::TwosComplement => {
                if delta < 0 {
                    delta + 128
                } else {
                    delta
                }
            }
            Self::OffsetBinary => delta + 64,
            Self::SignedBit => {
                if delta < 0 {
                    -delta
                } else {
                    delta + 64
                }
            }
            Self::SignedBit2 => {
                if delta <= 0 {
                    64 - delta
                } else {
                    delta
                }
            }
            Self::Relative2 => {
                if delta < 0 {
                    0x40 + delta
                } else {
                    delta
                }
            }
            Self::Relative4 => {
                if delta < 0 {
                    -delta
                } else {
                    delta + 0x40
                }
            }
        };
        let c = if c < 0 {
            0
        } else if c > 0x7f {
            0x7f
        } else {
            c
        };
        ControlByte::new(c as u8)
    }
}
