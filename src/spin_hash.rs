//! SpinHasher: validated hash configuration and the hashing pipeline.
//!
//! Orchestrates seed derivation, the two Mulberry32 streams, the
//! [`HashMixer`] and the output [`Encoding`](crate::encoder::Encoding).
//! Every call builds its own streams and working array, so a single
//! `SpinHasher` can be shared freely across threads.

use std::num::NonZeroUsize;

use tracing::{debug, debug_span};

use crate::error::SchaError;
use crate::mixer::HashMixer;
use crate::random::mulberry32::Mulberry32;
use crate::random::seed::SeedPair;
use crate::utils::converter::to_code_units;
use crate::variant::Variant;

/// Default number of output units used by the command-line front end.
pub const DEFAULT_HASH_LENGTH: usize = 256;

/// Validated hash configuration: a [`Variant`] and an output length.
///
/// # Examples
///
/// ```
/// use scha::{SpinHasher, Variant};
///
/// let hasher = SpinHasher::new(Variant::ByteHex, 16).unwrap();
/// let digest = hasher.hash("Lorem Ipsum Dolor Sit Amet.");
/// assert_eq!(digest.len(), 32);
/// assert_eq!(digest, hasher.hash("Lorem Ipsum Dolor Sit Amet."));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpinHasher {
    variant: Variant,
    length: NonZeroUsize,
}

impl SpinHasher {
    /// Creates a hasher for the given variant and length.
    ///
    /// # Parameters
    /// - `variant`: Output configuration.
    /// - `length`: Number of output units (bytes for byte-hex, 16-bit words
    ///   for wide-hex, characters for the small alphabet).
    ///
    /// # Errors
    /// Returns [`SchaError::InvalidHashLength`] if `length == 0`.
    ///
    /// ```
    /// use scha::{SpinHasher, Variant};
    ///
    /// assert!(SpinHasher::new(Variant::WideHex, 0).is_err());
    /// ```
    pub fn new(variant: Variant, length: usize) -> Result<Self, SchaError> {
        let length = NonZeroUsize::new(length).ok_or(SchaError::InvalidHashLength { length })?;
        Ok(SpinHasher { variant, length })
    }

    /// Creates a byte-hex hasher of the given length.
    ///
    /// # Errors
    /// Returns [`SchaError::InvalidHashLength`] if `length == 0`.
    pub fn with_length(length: usize) -> Result<Self, SchaError> {
        Self::new(Variant::ByteHex, length)
    }

    /// Returns the configured variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the configured number of output units.
    pub fn length(&self) -> usize {
        self.length.get()
    }

    /// Returns the number of characters every hash from this hasher has.
    pub fn output_len(&self) -> usize {
        self.variant.output_len(self.length.get())
    }

    /// Hashes a string, treating it as UTF-16 code units.
    pub fn hash(&self, text: &str) -> String {
        self.hash_code_units(&to_code_units(text))
    }

    /// Hashes a sequence of UTF-16 code units.
    ///
    /// Unpaired surrogates are hashed like any other unit.
    pub fn hash_code_units(&self, units: &[u16]) -> String {
        let _span = debug_span!("scha_hash", variant = %self.variant, length = self.length.get())
            .entered();
        let params = self.variant.params();

        let seeds = SeedPair::derive(units, &params);
        debug!(
            digest = seeds.digest,
            seed1 = seeds.seed1,
            seed2 = seeds.seed2,
            "derived stream seeds"
        );
        let mut stream1 = Mulberry32::new(seeds.seed1);
        let mut stream2 = Mulberry32::new(seeds.seed2);

        let mut mixer = HashMixer::new(self.length, params, &mut stream1, &mut stream2);
        mixer.absorb(units, &mut stream1);

        let output = params.encoding.encode(mixer.working(), &mut stream2);
        debug!(chars = output.len(), "hash complete");
        output
    }
}
