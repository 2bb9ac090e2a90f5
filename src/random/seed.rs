//! Text-to-seed derivation for the two hash streams.
//!
//! The whole input is folded into a single scalar digest
//! (`1 + Σ (code + 2)`), from which two decorrelated seeds are derived
//! without a second pass over the text:
//!
//! - `seed1 = digest > M ? digest mod M : digest - M`
//! - `seed2 = (digest * k) mod M`
//!
//! `M` and `k` come from the variant. `digest - M` is negative for short
//! inputs; it is reduced to 32 bits by the unsigned cast, never rejected.

use crate::variant::VariantParams;

/// Digest and the pair of stream seeds derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPair {
    /// `1 + Σ (code + 2)` over all code units.
    pub digest: u64,
    /// Seed of stream1.
    pub seed1: u32,
    /// Seed of stream2.
    pub seed2: u32,
}

impl SeedPair {
    /// Derives both stream seeds from the text's code units.
    ///
    /// # Parameters
    /// - `units`: The text as UTF-16 code units.
    /// - `params`: The variant constants supplying `M` and `k`.
    pub fn derive(units: &[u16], params: &VariantParams) -> Self {
        let digest = digest(units);
        let modulus = params.seed_modulus;

        let seed1 = if digest > modulus {
            (digest % modulus) as u32
        } else {
            // Truncating the wrapped difference is the mod 2^32 reduction.
            digest.wrapping_sub(modulus) as u32
        };
        let seed2 = (digest.wrapping_mul(params.seed_multiplier) % modulus) as u32;

        SeedPair {
            digest,
            seed1,
            seed2,
        }
    }
}

/// Folds the code units into the seed digest `1 + Σ (code + 2)`.
pub fn digest(units: &[u16]) -> u64 {
    units
        .iter()
        .fold(1u64, |acc, &unit| acc.wrapping_add(unit as u64 + 2))
}
