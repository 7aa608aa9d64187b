// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Q-format quantization and 16-bit fixed-point runtime operations.

pub mod ops;
pub mod qformat;
