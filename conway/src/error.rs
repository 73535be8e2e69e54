// error.rs - Error types for the conway crate

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("cell state must be 0 or 1, got {0}")]
    InvalidCellState(u8),

    #[error("{len} cells do not form a square grid")]
    NotSquare { len: usize },

    #[error("grid side {got} does not match the board side {expected}")]
    SideMismatch { expected: usize, got: usize },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to build the row task runtime")]
    Runtime(#[from] std::io::Error),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },

    #[error("{key} must be {expected}, got {value}")]
    OutOfRange {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}
