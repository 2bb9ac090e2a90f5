//! HashMixer: the spinning working-array engine.
//!
//! The mixer owns the fixed-length working array of a single hash. It is
//! filled from both streams, then perturbed once per (possibly padded) input
//! position. Every perturbation step spins the whole array by one position,
//! alternating direction on a fixed duty cycle, so a single input unit can
//! reach every slot within `length` subsequent steps.

use std::num::NonZeroUsize;

use tracing::debug;

use crate::random::mulberry32::Mulberry32;
use crate::utils::bits::scale;
use crate::utils::spin::Spin;
use crate::variant::VariantParams;

/// Bit width of the stream1 draw folded into each per-position seed.
const POSITION_SEED_BITS: u32 = 16;

/// Added to every code unit (and to padding zeros) before mixing.
const CODE_OFFSET: u32 = 2;

/// Working array of a single hash computation.
///
/// # Lifecycle
///
/// 1. [`new`](Self::new) fills the array from stream1 and stream2 (and, for
///    variants with randomized direction, takes one more stream2 draw).
/// 2. [`absorb`](Self::absorb) perturbs and spins the array over the input.
/// 3. [`into_working`](Self::into_working) hands the array to the encoder.
#[derive(Debug, Clone)]
pub struct HashMixer {
    working: Vec<u32>,
    params: VariantParams,
    carry: u32,
    forward: Spin,
}

impl HashMixer {
    /// Creates and initializes the working array.
    ///
    /// Slot `i` is `scaled(stream1) ^ scaled(stream2)` at the variant's
    /// initialization width, so each slot advances both streams once.
    ///
    /// # Parameters
    /// - `length`: Number of working-array units.
    /// - `params`: Variant constants.
    /// - `stream1`: First hash stream.
    /// - `stream2`: Second hash stream.
    pub fn new(
        length: NonZeroUsize,
        params: VariantParams,
        stream1: &mut Mulberry32,
        stream2: &mut Mulberry32,
    ) -> Self {
        let length = length.get();
        let mut working = Vec::with_capacity(length);
        for _ in 0..length {
            let a = stream1.next_scaled(params.init_bits);
            let b = stream2.next_scaled(params.init_bits);
            working.push(a ^ b);
        }

        // Top bit of one extra draw decides whether left or right is "forward".
        let forward = if params.randomized_direction && stream2.next_u32() >> 31 == 1 {
            Spin::Right
        } else {
            Spin::Left
        };

        HashMixer {
            working,
            params,
            carry: 0,
            forward,
        }
    }

    /// Returns the number of working-array units.
    pub fn len(&self) -> usize {
        self.working.len()
    }

    /// Always `false`: the length is non-zero by construction.
    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    /// Returns the current working array.
    pub fn working(&self) -> &[u32] {
        &self.working
    }

    /// Consumes the mixer and returns the working array.
    pub fn into_working(self) -> Vec<u32> {
        self.working
    }

    /// Returns the spin applied after perturbation step `step`.
    ///
    /// The cycle spans `4 * length` steps (`length` rounded up to even for
    /// `even_cycle` variants). The first `2 * length` steps of each cycle
    /// spin forward, the rest reverse.
    pub fn spin_for_step(&self, step: usize) -> Spin {
        let length = self.working.len();
        let cycle_base = if self.params.even_cycle {
            length + length % 2
        } else {
            length
        };
        if step % (4 * cycle_base) < 2 * length {
            self.forward
        } else {
            self.forward.reversed()
        }
    }

    /// Perturbs the working array with the input code units.
    ///
    /// Runs `padded_length(units.len(), length) + 2 * length` steps. Each
    /// step reads the unit at that position (0 past the end), draws twice
    /// from `stream1`, XORs the result into slot `step % length` and spins
    /// the whole array.
    ///
    /// # Parameters
    /// - `units`: The text as UTF-16 code units.
    /// - `stream1`: First hash stream, continuing after initialization.
    pub fn absorb(&mut self, units: &[u16], stream1: &mut Mulberry32) {
        let length = self.working.len();
        let padded = padded_length(units.len(), length);
        let steps = padded + 2 * length;
        debug!(units = units.len(), padded, steps, "perturbing working array");

        for step in 0..steps {
            let code = units.get(step).map_or(0, |&unit| u32::from(unit)) + CODE_OFFSET;

            let position_seed =
                code.wrapping_add(stream1.next_scaled(POSITION_SEED_BITS)) ^ self.carry;
            let modified = scale(Mulberry32::first(position_seed), self.params.modified_bits);

            let slot = step % length;
            let perturbation = code ^ stream1.next_scaled(self.params.perturb_bits);
            self.working[slot] = modified ^ (perturbation ^ self.working[slot]);

            if self.params.chained {
                self.carry ^= modified;
            }

            self.spin_for_step(step).apply(&mut self.working);
        }
    }
}

/// Returns the smallest multiple of `hash_length` that is `>= text_length`.
///
/// # Parameters
/// - `text_length`: Number of input code units.
/// - `hash_length`: Working-array length (non-zero).
pub fn padded_length(text_length: usize, hash_length: usize) -> usize {
    match text_length % hash_length {
        0 => text_length,
        rem => text_length + (hash_length - rem),
    }
}
