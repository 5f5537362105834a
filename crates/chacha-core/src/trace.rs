//! Observation hooks for inspecting the working state during a block.
//!
//! The hardware model this crate validates exposes intermediate values for
//! waveform comparison. Rather than interleaving print statements with the
//! round logic, the engine reports the working state to an observer after
//! each quarter-round and double-round; the round functions themselves stay
//! pure.

use crate::block::STATE_WORDS;

/// Callback surface invoked while the round network permutes the working
/// state. Both hooks default to no-ops so an observer only implements the
/// granularity it needs.
pub trait StateObserver {
    /// Called after each quarter-round with its index within the current
    /// double-round (0..8) and the working state.
    fn after_quarter_round(&mut self, index: usize, x: &[u32; STATE_WORDS]) {
        let _ = (index, x);
    }

    /// Called after each double-round with its index within the current
    /// block (0..rounds/2) and the working state.
    fn after_double_round(&mut self, index: usize, x: &[u32; STATE_WORDS]) {
        let _ = (index, x);
    }
}

/// Observer that records nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentObserver;

impl StateObserver for SilentObserver {}
