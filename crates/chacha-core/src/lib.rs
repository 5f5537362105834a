//! Bit-exact reference model of the ChaCha stream cipher.
//!
//! This crate mirrors the structure of the hardware implementation it is
//! used to validate and provides:
//! - State initialization from key, IV, fixed constants, and block counter.
//! - The ARX round network: quarter-rounds applied as column/diagonal
//!   double-round pairs.
//! - Per-block keystream derivation and XOR combination, with a 64-bit
//!   block counter advanced per block.
//!
//! The implementation aims for clarity and bit-for-bit reproducibility
//! against known test vectors rather than speed or constant-time
//! guarantees; it must not be used to protect real traffic.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod key;
mod round;
mod trace;

pub use crate::block::{
    block_from_words, le_from_word, word_from_le, xor_in_place, Block, BLOCK_BYTES, STATE_WORDS,
};
pub use crate::cipher::{CipherEngine, CONSTANT_SLOTS, COUNTER_SLOTS, IV_SLOTS, KEY_SLOTS};
pub use crate::error::CipherError;
pub use crate::key::{Iv, Key, SIGMA, TAU};
pub use crate::round::{
    double_round, quarter_round, quarter_round_at, COLUMN_PATTERN, DIAGONAL_PATTERN,
};
pub use crate::trace::{SilentObserver, StateObserver};
