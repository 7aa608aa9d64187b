// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Wrapper for raw i16 holding a value in any Q-format.

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
#[repr(transparent)]
pub struct Fp16(pub i16);

impl Fp16 {
    pub const ZERO: Fp16 = Fp16(0);
    pub const MIN: Fp16 = Fp16(i16::MIN);
    pub const MAX: Fp16 = Fp16(i16::MAX);
}
