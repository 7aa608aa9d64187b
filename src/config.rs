// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

use crate::fxp::qformat::RoundingPolicy;

/// Smallest value of the 16-bit signed container.
pub const INT16_MIN: i64 = i16::MIN as i64;

/// Largest value of the 16-bit signed container.
pub const INT16_MAX: i64 = i16::MAX as i64;

/// Highest number of fractional bits a 16-bit signed format can carry.
pub const MAX_FRAC_BITS: u32 = 15;

/// Minimum column width of an emitted name.
pub const NAME_COLUMN_WIDTH: usize = 35;

/// Minimum column width of an emitted value.
pub const VALUE_COLUMN_WIDTH: usize = 20;

/// Prefix of constants that fit the 16-bit container.
pub const IN_RANGE_PREFIX: &str = "FP16";

/// Prefix of constants that need wider storage at the given format.
pub const OVERFLOW_PREFIX: &str = "FP32";

/// Dashes following the `// ` of a separator line.
pub const SEPARATOR_DASHES: usize = 74;

/// Presentation and rounding settings of a generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub name_width: usize,
    pub value_width: usize,
    pub in_range_prefix: &'static str,
    pub overflow_prefix: &'static str,
    pub rounding: RoundingPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            name_width: NAME_COLUMN_WIDTH,
            value_width: VALUE_COLUMN_WIDTH,
            in_range_prefix: IN_RANGE_PREFIX,
            overflow_prefix: OVERFLOW_PREFIX,
            rounding: RoundingPolicy::default(),
        }
    }
}
