//! Output configurations sharing the spinning mixer.
//!
//! Each [`Variant`] selects a set of constants ([`VariantParams`]) that
//! drive seed derivation, mixing and encoding. The mixing engine itself is
//! the same for all of them.

use std::fmt;
use std::str::FromStr;

use crate::encoder::Encoding;
use crate::error::SchaError;

/// Documented output configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Radix 256 working values, two hex digits per unit.
    #[default]
    ByteHex,
    /// Radix 65536 working values with chained per-position seeds, four hex
    /// digits per unit.
    WideHex,
    /// Radix 256 working values encoded into the five-character cat
    /// alphabet (`u`, `o`, `i`, `a`, space), one character per unit.
    SmallAlphabet,
}

/// Constants that parameterize seed derivation, mixing and encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantParams {
    /// Modulus `M` applied to the digest when deriving both seeds.
    pub seed_modulus: u64,
    /// Multiplier `k` applied to the digest for the second seed.
    pub seed_multiplier: u64,
    /// Bit width of each stream draw used to fill the working array.
    pub init_bits: u32,
    /// Bit width of the per-position generator's draw. Zero means the draw
    /// is used unscaled and contributes nothing to the slot.
    pub modified_bits: u32,
    /// Bit width of the stream1 draw XORed into each perturbed slot.
    pub perturb_bits: u32,
    /// Whether modified values are carried into the next per-position seed.
    pub chained: bool,
    /// Whether the spin cycle is computed from the length rounded up to even.
    pub even_cycle: bool,
    /// Whether an extra stream2 draw may invert the spin direction mapping.
    pub randomized_direction: bool,
    /// How the mixed working array is rendered.
    pub encoding: Encoding,
}

const BYTE_PARAMS: VariantParams = VariantParams {
    seed_modulus: 1 << 16,
    seed_multiplier: 2,
    init_bits: 8,
    modified_bits: 0,
    perturb_bits: 8,
    chained: false,
    even_cycle: false,
    randomized_direction: false,
    encoding: Encoding::Hex { radix_bits: 8 },
};

const WIDE_PARAMS: VariantParams = VariantParams {
    seed_modulus: 1 << 32,
    seed_multiplier: 4,
    init_bits: 16,
    modified_bits: 16,
    perturb_bits: 16,
    chained: true,
    even_cycle: true,
    randomized_direction: true,
    encoding: Encoding::Hex { radix_bits: 16 },
};

const SMALL_ALPHABET_PARAMS: VariantParams = VariantParams {
    encoding: Encoding::CatAlphabet,
    ..BYTE_PARAMS
};

impl Variant {
    /// All variants, in declaration order.
    pub const ALL: [Variant; 3] = [Variant::ByteHex, Variant::WideHex, Variant::SmallAlphabet];

    /// Returns the constants for this variant.
    pub fn params(self) -> VariantParams {
        match self {
            Variant::ByteHex => BYTE_PARAMS,
            Variant::WideHex => WIDE_PARAMS,
            Variant::SmallAlphabet => SMALL_ALPHABET_PARAMS,
        }
    }

    /// Returns the canonical name used by `Display` and `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Variant::ByteHex => "byte-hex",
            Variant::WideHex => "wide-hex",
            Variant::SmallAlphabet => "small-alphabet",
        }
    }

    /// Returns the number of output characters for a hash of `length` units.
    ///
    /// # Examples
    ///
    /// ```
    /// use scha::Variant;
    ///
    /// assert_eq!(Variant::ByteHex.output_len(256), 512);
    /// assert_eq!(Variant::WideHex.output_len(256), 1024);
    /// assert_eq!(Variant::SmallAlphabet.output_len(256), 256);
    /// ```
    pub fn output_len(self, length: usize) -> usize {
        length * self.params().encoding.chars_per_unit()
    }

    /// Returns the theoretical entropy of a `length`-unit output, in bits.
    ///
    /// `8n` for byte-hex, `16n` for wide-hex and `n * log2(5)` for the
    /// small alphabet.
    pub fn entropy_bits(self, length: usize) -> f64 {
        length as f64 * self.params().encoding.bits_per_unit()
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = SchaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "byte-hex" | "byte" | "hex" => Ok(Variant::ByteHex),
            "wide-hex" | "wide" => Ok(Variant::WideHex),
            "small-alphabet" | "small" | "cat" => Ok(Variant::SmallAlphabet),
            _ => Err(SchaError::UnknownVariant(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_byte_hex() {
        assert_eq!(Variant::default(), Variant::ByteHex);
    }

    #[test]
    fn test_name_roundtrip() {
        for variant in Variant::ALL {
            assert_eq!(variant.name().parse::<Variant>(), Ok(variant));
            assert_eq!(variant.to_string(), variant.name());
        }
    }

    #[test]
    fn test_parse_aliases_and_case() {
        assert_eq!("HEX".parse::<Variant>(), Ok(Variant::ByteHex));
        assert_eq!(" wide ".parse::<Variant>(), Ok(Variant::WideHex));
        assert_eq!("cat".parse::<Variant>(), Ok(Variant::SmallAlphabet));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "base64".parse::<Variant>(),
            Err(SchaError::UnknownVariant("base64".to_string()))
        );
    }

    #[test]
    fn test_output_len() {
        assert_eq!(Variant::ByteHex.output_len(1), 2);
        assert_eq!(Variant::WideHex.output_len(1), 4);
        assert_eq!(Variant::SmallAlphabet.output_len(1), 1);
        assert_eq!(Variant::ByteHex.output_len(384), 768);
    }

    #[test]
    fn test_entropy_bits() {
        assert_eq!(Variant::ByteHex.entropy_bits(128), 1024.0);
        assert_eq!(Variant::WideHex.entropy_bits(128), 2048.0);
        let small = Variant::SmallAlphabet.entropy_bits(16);
        assert!((small - 37.15).abs() < 0.01, "unexpected entropy {}", small);
    }

    #[test]
    fn test_small_alphabet_shares_byte_mixing() {
        let byte = Variant::ByteHex.params();
        let small = Variant::SmallAlphabet.params();
        assert_eq!(small.seed_modulus, byte.seed_modulus);
        assert_eq!(small.init_bits, byte.init_bits);
        assert_eq!(small.perturb_bits, byte.perturb_bits);
        assert_ne!(small.encoding, byte.encoding);
    }

    #[test]
    fn test_wide_params() {
        let wide = Variant::WideHex.params();
        assert_eq!(wide.seed_modulus, 1 << 32);
        assert_eq!(wide.seed_multiplier, 4);
        assert!(wide.chained && wide.even_cycle && wide.randomized_direction);
    }
}
