// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Q-format descriptor for a 16-bit signed container.

use core::fmt;

use crate::config::{INT16_MAX, INT16_MIN, MAX_FRAC_BITS};
use crate::error::{GeneratorError, Result};
use crate::fxp::qformat::to_float;

/// Number of fractional bits of a 16-bit signed fixed-point format (`Q0`..=`Q15`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedPointFormat {
    frac_bits: u32,
}

impl FixedPointFormat {
    pub fn new(frac_bits: u32) -> Result<Self> {
        if frac_bits > MAX_FRAC_BITS {
            return Err(GeneratorError::InvalidFracBits(frac_bits));
        }
        Ok(Self { frac_bits })
    }

    /// All formats from `Q0` to `Q15`, ascending.
    pub fn all() -> impl Iterator<Item = FixedPointFormat> {
        (0..=MAX_FRAC_BITS).map(|frac_bits| FixedPointFormat { frac_bits })
    }

    pub const fn frac_bits(self) -> u32 {
        self.frac_bits
    }

    /// Value of one least-significant unit.
    pub fn precision(self) -> f64 {
        to_float(1, self.frac_bits)
    }

    pub fn max_value(self) -> f64 {
        to_float(INT16_MAX, self.frac_bits)
    }

    pub fn min_value(self) -> f64 {
        to_float(INT16_MIN, self.frac_bits)
    }
}

impl fmt::Display for FixedPointFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.frac_bits)
    }
}
