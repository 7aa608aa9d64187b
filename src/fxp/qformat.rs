// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Float to Q-format quantization and overflow classification.
//!
//! Quantization never clamps. The raw integer may lie outside the 16-bit
//! container; callers learn about that through [`classify`].

use crate::config::{INT16_MAX, INT16_MIN};
use crate::types::quantized::Classification;

/// Tie-breaking rule applied when a scaled value lies exactly between two integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RoundingPolicy {
    /// `0.5 -> 0`, `1.5 -> 2`, `2.5 -> 2`. Used for generated tables.
    #[default]
    TiesToEven,
    /// `0.5 -> 1`, `-0.5 -> -1`. Matches C `round()` on the target.
    TiesAwayFromZero,
}

impl RoundingPolicy {
    pub fn round(self, x: f64) -> f64 {
        match self {
            RoundingPolicy::TiesToEven => x.round_ties_even(),
            RoundingPolicy::TiesAwayFromZero => x.round(),
        }
    }
}

/// `2^frac_bits` as a float.
#[inline]
pub fn scale(frac_bits: u32) -> f64 {
    debug_assert!(frac_bits < 32);
    f64::from(1u32 << frac_bits)
}

/// `round(value * 2^frac_bits)` with the default tie-breaking rule.
pub fn quantize(value: f64, frac_bits: u32) -> i64 {
    quantize_with(value, frac_bits, RoundingPolicy::default())
}

/// `round(value * 2^frac_bits)` with an explicit tie-breaking rule.
pub fn quantize_with(value: f64, frac_bits: u32, policy: RoundingPolicy) -> i64 {
    policy.round(value * scale(frac_bits)) as i64
}

/// Clamps a raw value into the 16-bit signed range.
pub fn saturate(raw: i64) -> i64 {
    raw.clamp(INT16_MIN, INT16_MAX)
}

/// Overflow probe: a raw value that saturation would change does not fit 16 bits.
pub fn classify(raw: i64) -> Classification {
    if raw != saturate(raw) {
        Classification::Overflow
    } else {
        Classification::InRange
    }
}

/// Inverse of [`quantize`]: `raw / 2^frac_bits`.
pub fn to_float(raw: i64, frac_bits: u32) -> f64 {
    raw as f64 / scale(frac_bits)
}
