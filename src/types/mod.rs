// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Value types of the Q-format model.

pub mod constant;
pub mod format;
pub mod quantized;
pub mod scalar;
