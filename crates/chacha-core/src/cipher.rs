//! Engine construction and per-block keystream processing.

use crate::block::{block_from_words, xor_in_place, Block, BLOCK_BYTES, STATE_WORDS};
use crate::error::CipherError;
use crate::key::{Iv, Key};
use crate::round::{double_round, quarter_round_at, COLUMN_PATTERN, DIAGONAL_PATTERN};
use crate::trace::StateObserver;

/// State slots holding the four constant words.
pub const CONSTANT_SLOTS: [usize; 4] = [0, 1, 2, 3];

/// State slots holding the eight key words.
pub const KEY_SLOTS: [usize; 8] = [4, 5, 6, 7, 8, 9, 10, 11];

/// State slots holding the block counter, low word first.
pub const COUNTER_SLOTS: [usize; 2] = [12, 13];

/// State slots holding the two IV words.
pub const IV_SLOTS: [usize; 2] = [14, 15];

/// Stream cipher engine owning the 16-word state, the round count, and the
/// 64-bit block counter.
///
/// The internal state is always the matrix derived from key, IV, constants,
/// and the current counter value; processing a block never mutates anything
/// except the counter slots. An engine instance is single-threaded state:
/// sharing one across concurrent callers would race on the counter.
#[derive(Clone, Debug)]
pub struct CipherEngine {
    state: [u32; STATE_WORDS],
    rounds: u32,
}

impl CipherEngine {
    /// Round count used by [`CipherEngine::new`].
    pub const DEFAULT_ROUNDS: u32 = 8;

    /// Builds an engine with the default round count.
    ///
    /// `key` must be 16 or 32 bytes (selecting the TAU or SIGMA constants
    /// respectively) and `iv` must be 8 bytes. The block counter starts at
    /// zero.
    pub fn new(key: &[u8], iv: &[u8]) -> Result<Self, CipherError> {
        Self::with_rounds(key, iv, Self::DEFAULT_ROUNDS)
    }

    /// Builds an engine applying `rounds` rounds per block.
    ///
    /// Rounds are applied as column/diagonal double-round pairs, so `rounds`
    /// must be even and at least 2.
    pub fn with_rounds(key: &[u8], iv: &[u8], rounds: u32) -> Result<Self, CipherError> {
        if rounds < 2 || rounds % 2 != 0 {
            return Err(CipherError::InvalidRoundCount(rounds));
        }
        let key = Key::from_slice(key)?;
        let iv = Iv::from_slice(iv)?;

        let mut state = [0u32; STATE_WORDS];
        for (slot, word) in CONSTANT_SLOTS.into_iter().zip(key.constants()) {
            state[slot] = word;
        }
        for (slot, word) in KEY_SLOTS.into_iter().zip(key.words()) {
            state[slot] = word;
        }
        for (slot, word) in IV_SLOTS.into_iter().zip(iv.words()) {
            state[slot] = word;
        }
        Ok(Self { state, rounds })
    }

    /// Returns the configured round count.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Returns the current 64-bit block counter.
    pub fn counter(&self) -> u64 {
        let [lo, hi] = COUNTER_SLOTS;
        u64::from(self.state[lo]) | (u64::from(self.state[hi]) << 32)
    }

    /// Positions the block counter, e.g. to seek within the keystream or to
    /// replay a block.
    pub fn set_counter(&mut self, counter: u64) {
        let [lo, hi] = COUNTER_SLOTS;
        self.state[lo] = counter as u32;
        self.state[hi] = (counter >> 32) as u32;
    }

    /// Returns a copy of the internal 16-word state.
    pub fn state(&self) -> [u32; STATE_WORDS] {
        self.state
    }

    /// Produces the next 64-byte keystream block and advances the counter.
    pub fn keystream_block(&mut self) -> Block {
        let mut x = self.state;
        for _ in 0..self.rounds / 2 {
            double_round(&mut x);
        }
        self.finish_block(x)
    }

    /// Like [`CipherEngine::keystream_block`], reporting the working state
    /// to `observer` after every quarter-round and double-round. The round
    /// schedule is the same column/diagonal pairing as [`double_round`],
    /// unrolled so the observer sees each quarter-round.
    pub fn keystream_block_observed(&mut self, observer: &mut dyn StateObserver) -> Block {
        let mut x = self.state;
        for dr in 0..self.rounds / 2 {
            for (qr, pattern) in COLUMN_PATTERN
                .into_iter()
                .chain(DIAGONAL_PATTERN)
                .enumerate()
            {
                quarter_round_at(&mut x, pattern);
                observer.after_quarter_round(qr, &x);
            }
            observer.after_double_round(dr as usize, &x);
        }
        self.finish_block(x)
    }

    /// Adds the permuted working state to the internal state, advances the
    /// counter, and serializes the keystream block.
    fn finish_block(&mut self, mut x: [u32; STATE_WORDS]) -> Block {
        for (word, init) in x.iter_mut().zip(self.state.iter()) {
            *word = word.wrapping_add(*init);
        }
        self.increment_counter();
        block_from_words(&x)
    }

    /// Encrypts or decrypts one 64-byte block.
    ///
    /// Output byte `i` is input byte `i` XOR keystream byte `i`; the
    /// operation is its own inverse. The counter advances by one on
    /// success; on a length error the engine is left untouched.
    pub fn process_block(&mut self, input: &[u8]) -> Result<Block, CipherError> {
        let mut out = Self::checked_block(input)?;
        let keystream = self.keystream_block();
        xor_in_place(&mut out, &keystream);
        Ok(out)
    }

    /// Like [`CipherEngine::process_block`], reporting the working state to
    /// `observer` after every quarter-round and double-round.
    pub fn process_block_observed(
        &mut self,
        input: &[u8],
        observer: &mut dyn StateObserver,
    ) -> Result<Block, CipherError> {
        let mut out = Self::checked_block(input)?;
        let keystream = self.keystream_block_observed(observer);
        xor_in_place(&mut out, &keystream);
        Ok(out)
    }

    /// Validates the input length and copies it into an owned block.
    fn checked_block(input: &[u8]) -> Result<Block, CipherError> {
        if input.len() != BLOCK_BYTES {
            return Err(CipherError::InvalidBlockLength(input.len()));
        }
        let mut out = [0u8; BLOCK_BYTES];
        out.copy_from_slice(input);
        Ok(out)
    }

    /// Increments the 64-bit counter split across the counter slots: the
    /// low word wraps at 2^32 and carries into the high word; the full
    /// counter silently wraps at 2^64.
    fn increment_counter(&mut self) {
        let [lo, hi] = COUNTER_SLOTS;
        let (low, carry) = self.state[lo].overflowing_add(1);
        self.state[lo] = low;
        if carry {
            self.state[hi] = self.state[hi].wrapping_add(1);
        }
    }
}
