//! Error type for reading problems and writing results.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AriprogError {
    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    /// Input ended before the named value.
    #[error("missing value for {name}")]
    MissingValue { name: &'static str },
    /// Token is not a non-negative integer.
    #[error("invalid value for {name}: {token:?}")]
    InvalidValue { name: &'static str, token: String },
    /// Progression length must be at least one.
    #[error("progression length must be positive")]
    ZeroLength,
    /// The membership table for this bound does not fit in memory addressing.
    #[error("bound {bound} is too large: table size overflows")]
    BoundTooLarge { bound: usize },
}

pub type Result<T> = std::result::Result<T, AriprogError>;
