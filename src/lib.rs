// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! fp16-qdefs: deterministic Q-format constant tables for 16-bit signed fixed-point code.

pub mod catalogue;
pub mod config;
pub mod digest;
pub mod error;
pub mod fxp;
pub mod render;
pub mod types;

pub use catalogue::Catalogue;
pub use config::GeneratorConfig;
pub use error::{GeneratorError, Result};
pub use render::TableRenderer;
pub use types::format::FixedPointFormat;

#[cfg(test)]
pub mod tests;
