//! 错误类型定义

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Contract ID {id} has invalid length {len}, expected {expected}")]
    InvalidLength {
        id: String,
        len: usize,
        expected: &'static str,
    },

    #[error("Invalid character '{ch}' at position {position} in contract ID")]
    InvalidChar { ch: char, position: usize },

    #[error("Contract ID checksum mismatch: expected '{expected}', got '{got}'")]
    ChecksumMismatch { expected: char, got: char },

    #[error("Check value {0} has no check digit")]
    UnmappedCheckValue(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
