// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! The ordered catalogue of constants emitted for every Q-format.
//!
//! Insertion order is the emission order. Names are unique.

use core::f64::consts;

use rustc_hash::FxHashMap;

use crate::error::{GeneratorError, Result};
use crate::types::constant::NamedConstant;

#[derive(Debug, Clone)]
pub struct Catalogue {
    entries: Vec<NamedConstant>,
    index: FxHashMap<&'static str, usize>,
}

impl Catalogue {
    /// Builds a catalogue, rejecting duplicate names and non-finite values.
    pub fn new<I>(constants: I) -> Result<Self>
    where
        I: IntoIterator<Item = NamedConstant>,
    {
        let mut catalogue = Self::empty();
        for constant in constants {
            if !constant.value.is_finite() {
                return Err(GeneratorError::NonFiniteConstant(constant.name.to_string()));
            }
            if catalogue.index.contains_key(constant.name) {
                return Err(GeneratorError::DuplicateConstant(constant.name.to_string()));
            }
            catalogue.push(constant);
        }
        Ok(catalogue)
    }

    /// The fixed catalogue of circular, logarithmic and fractional constants.
    pub fn standard() -> Self {
        let mut catalogue = Self::empty();
        for constant in standard_constants() {
            catalogue.push(constant);
        }
        catalogue
    }

    fn empty() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    fn push(&mut self, constant: NamedConstant) {
        self.index.insert(constant.name, self.entries.len());
        self.entries.push(constant);
    }

    pub fn get(&self, name: &str) -> Option<&NamedConstant> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn iter(&self) -> core::slice::Iter<'_, NamedConstant> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a NamedConstant;
    type IntoIter = core::slice::Iter<'a, NamedConstant>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

pub(crate) fn standard_constants() -> [NamedConstant; 30] {
    [
        NamedConstant::new("M_E", consts::E),
        NamedConstant::new("M_LOG2E", consts::LOG2_E),
        NamedConstant::new("M_LOG10E", consts::LOG10_E),
        NamedConstant::new("M_LN2", consts::LN_2),
        NamedConstant::new("M_PI", consts::PI),
        NamedConstant::new("M_PI_2", consts::FRAC_PI_2),
        NamedConstant::new("M_PI_4", consts::FRAC_PI_4),
        NamedConstant::new("M_1_PI", consts::FRAC_1_PI),
        NamedConstant::new("M_2_PI", consts::FRAC_2_PI),
        NamedConstant::new("M_2_SQRTPI", consts::FRAC_2_SQRT_PI),
        NamedConstant::new("M_SQRT2", consts::SQRT_2),
        NamedConstant::new("M_SQRT1_2", consts::FRAC_1_SQRT_2),
        NamedConstant::new("M_TWOPI", consts::TAU),
        NamedConstant::new("M_3PI_4", 3.0 * consts::PI / 4.0),
        NamedConstant::new("M_SQRTPI", consts::PI.sqrt()),
        NamedConstant::new("M_SQRT3", 3.0f64.sqrt()),
        NamedConstant::new("M_IVLN10", 1.0 / consts::LN_10),
        NamedConstant::new("M_LOG2_E", consts::LOG2_E),
        NamedConstant::new("M_INVLN2", 1.0 / consts::LN_2),
        NamedConstant::new("ONE_EIGHTH", 1.0 / 8.0),
        NamedConstant::new("ONE_QUARTER", 1.0 / 4.0),
        NamedConstant::new("THREE_EIGHTHS", 3.0 / 8.0),
        NamedConstant::new("ONE_HALF", 1.0 / 2.0),
        NamedConstant::new("FIVE_EIGHTHS", 5.0 / 8.0),
        NamedConstant::new("THREE_QUARTERS", 3.0 / 4.0),
        NamedConstant::new("SEVEN_EIGHTHS", 7.0 / 8.0),
        NamedConstant::new("ONE_THIRD", 1.0 / 3.0),
        NamedConstant::new("TWO_THIRDS", 2.0 / 3.0),
        NamedConstant::new("ONE", 1.0),
        NamedConstant::new("MINUS_ONE", -1.0),
    ]
}
