//! Mulberry32: 32-bit state pseudorandom stream generator.
//!
//! Every intermediate result is kept in exact 32-bit wraparound arithmetic
//! so the sequence for a given seed is bit-for-bit reproducible on any
//! platform.

use crate::utils::bits::{imul, scale};

/// Increment added to the state on every draw (Weyl sequence step).
const GOLDEN_GAMMA: u32 = 0x6D2B_79F5;

/// Divisor mapping a 32-bit draw onto [0, 1).
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Mulberry32 pseudorandom stream.
///
/// Owns a single 32-bit state word that advances on every draw. Two streams
/// constructed from the same seed produce identical sequences, and there is
/// no way to rewind a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Creates a new stream from the given seed.
    ///
    /// # Parameters
    /// - `seed`: The initial state. Seeds derived as negative integers must
    ///   be reduced modulo 2^32 (an `as u32` cast) before reaching here.
    pub fn new(seed: u32) -> Self {
        Mulberry32 { state: seed }
    }

    /// Returns the first draw of a stream seeded with `seed`.
    ///
    /// Equivalent to `Mulberry32::new(seed).next_u32()` without keeping the
    /// stream around. Used by the mixer for its per-position generator.
    pub fn first(seed: u32) -> u32 {
        Mulberry32::new(seed).next_u32()
    }

    /// Returns the current state word.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advances the stream and returns the next raw 32-bit value.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let a = self.state;

        let mut t = imul((a ^ (a >> 15)) as i32, (a | 1) as i32) as u32;
        t = t.wrapping_add(imul((t ^ (t >> 7)) as i32, (t | 0x3D) as i32) as u32) ^ t;
        t ^ (t >> 14)
    }

    /// Advances the stream and returns a value in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / TWO_POW_32
    }

    /// Advances the stream and returns `floor(next_f64() * 2^bits)`.
    ///
    /// # Parameters
    /// - `bits`: Width of the result in bits (0..=32).
    pub fn next_scaled(&mut self, bits: u32) -> u32 {
        scale(self.next_u32(), bits)
    }
}
