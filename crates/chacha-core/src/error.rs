//! Error types for the ChaCha reference model.

use std::fmt;

/// Errors produced when constructing or driving a [`crate::CipherEngine`].
///
/// Every variant is an input-validation failure detected synchronously at
/// the API boundary; the engine never fails mid-block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// Key length is not 16 or 32 bytes.
    InvalidKeyLength(usize),
    /// IV length is not 8 bytes.
    InvalidIvLength(usize),
    /// Round count is odd or less than 2.
    InvalidRoundCount(u32),
    /// Block input is not exactly 64 bytes.
    InvalidBlockLength(usize),
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherError::InvalidKeyLength(len) => {
                write!(f, "key must be 16 or 32 bytes, got {len}")
            }
            CipherError::InvalidIvLength(len) => {
                write!(f, "IV must be 8 bytes, got {len}")
            }
            CipherError::InvalidRoundCount(rounds) => {
                write!(f, "round count must be even and at least 2, got {rounds}")
            }
            CipherError::InvalidBlockLength(len) => {
                write!(f, "block input must be 64 bytes, got {len}")
            }
        }
    }
}

impl std::error::Error for CipherError {}
