// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

/// A catalogue entry: a real-valued constant and the suffix it is emitted under.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NamedConstant {
    pub name: &'static str,
    pub value: f64,
}

impl NamedConstant {
    pub const fn new(name: &'static str, value: f64) -> Self {
        Self { name, value }
    }
}
