//! Error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Invalid Q-format: {0} fractional bits (max 15)")]
    InvalidFracBits(u32),

    #[error("Duplicate catalogue constant: {0}")]
    DuplicateConstant(String),

    #[error("Catalogue constant {0} is not finite")]
    NonFiniteConstant(String),

    #[error("Fixed-point division by zero")]
    DivisionByZero,

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
