// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

use crate::fxp::qformat::{classify, quantize_with, to_float, RoundingPolicy};
use crate::types::constant::NamedConstant;
use crate::types::format::FixedPointFormat;

/// Whether a quantized value fits the 16-bit container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    InRange,
    Overflow,
}

impl Classification {
    pub fn is_overflow(self) -> bool {
        matches!(self, Classification::Overflow)
    }
}

/// A catalogue constant converted into one Q-format.
///
/// `raw` is the unclamped rounded integer; when `class` is `Overflow` it does
/// not fit an `i16`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuantizedConstant<'a> {
    pub constant: &'a NamedConstant,
    pub format: FixedPointFormat,
    pub raw: i64,
    pub class: Classification,
}

impl<'a> QuantizedConstant<'a> {
    pub fn new(constant: &'a NamedConstant, format: FixedPointFormat, policy: RoundingPolicy) -> Self {
        let raw = quantize_with(constant.value, format.frac_bits(), policy);
        Self {
            constant,
            format,
            raw,
            class: classify(raw),
        }
    }

    pub fn name(&self) -> &'static str {
        self.constant.name
    }

    /// The value the raw integer actually represents.
    pub fn realized(&self) -> f64 {
        to_float(self.raw, self.format.frac_bits())
    }

    /// Distance between the realized and the original value.
    pub fn error(&self) -> f64 {
        (self.realized() - self.constant.value).abs()
    }
}
