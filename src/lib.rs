//! SCHA: the Spinning Cat Hashing Algorithm.
//!
//! SCHA is a deterministic, non-cryptographic hash that maps text to a
//! pseudorandom output of configurable length. Two Mulberry32 streams seeded
//! from the input fill a working array, which is then perturbed once per
//! input position and spun (rotated by one position) on every step, with the
//! spin direction alternating on a fixed duty cycle.
//!
//! SCHA is **not** collision or preimage resistant. Do not use it where a
//! cryptographic hash is required.
//!
//! # Architecture
//!
//! ```text
//! imul / Mulberry32     (32-bit wraparound PRNG)
//!     ↑ two streams seeded by SeedPair (digest of the whole text)
//! HashMixer             (init → perturb + spin per position)
//!     ↓ working array + remaining stream2 draws
//! Encoding              (byte-hex | wide-hex | cat alphabet)
//!     ↑ all wired together by SpinHasher
//! ```
//!
//! # Examples
//!
//! Hash with the default byte-hex variant:
//!
//! ```
//! let digest = scha::hash("Lorem Ipsum Dolor Sit Amet.", 16).unwrap();
//! assert_eq!(digest.len(), 32);
//! assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
//! ```
//!
//! Pick another variant:
//!
//! ```
//! use scha::Variant;
//!
//! let cat = scha::hash_with(Variant::SmallAlphabet, "uia", 12).unwrap();
//! assert_eq!(cat.chars().count(), 12);
//! assert!(cat.chars().all(|c| "uoia ".contains(c)));
//! ```
//!
//! A zero length is a configuration error:
//!
//! ```
//! assert!(scha::hash("text", 0).is_err());
//! ```

#![deny(clippy::all)]

pub mod encoder;
pub mod error;
pub mod mixer;
pub mod random;
pub mod utils;
pub mod variant;

mod spin_hash;

pub use error::SchaError;
pub use spin_hash::{SpinHasher, DEFAULT_HASH_LENGTH};
pub use variant::Variant;

/// Hashes `text` into `length` bytes, rendered as `2 * length` hex digits.
///
/// # Errors
/// Returns [`SchaError::InvalidHashLength`] if `length == 0`.
pub fn hash(text: &str, length: usize) -> Result<String, SchaError> {
    hash_with(Variant::ByteHex, text, length)
}

/// Hashes `text` with the given variant and number of output units.
///
/// # Errors
/// Returns [`SchaError::InvalidHashLength`] if `length == 0`.
pub fn hash_with(variant: Variant, text: &str, length: usize) -> Result<String, SchaError> {
    Ok(SpinHasher::new(variant, length)?.hash(text))
}
