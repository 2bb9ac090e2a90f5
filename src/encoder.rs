//! Output encoder: renders the mixed working array as text.
//!
//! Encoding is not a pure function of the array. Every unit is first XORed
//! with a further draw from stream2, so the encoder consumes exactly one
//! stream2 draw per working-array element.

use tracing::trace;

use crate::random::mulberry32::Mulberry32;

/// Residue-to-character table of the cat alphabet, before the offset.
const CAT_TABLE: [u8; 5] = [0x65, 0x5F, 0x59, 0x51, 0x10];

/// Constant added to every table entry to obtain the output character.
const CAT_OFFSET: u8 = 0x10;

/// Scale applied to the stream2 draw before mixing it into a cat unit.
const CAT_DRAW_SCALE: f64 = 255.0;

/// Characters produced by [`Encoding::CatAlphabet`], indexed by residue.
pub const CAT_ALPHABET: [char; 5] = ['u', 'o', 'i', 'a', ' '];

/// Output representation of the working array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Each unit reduced modulo `2^radix_bits` and written as
    /// `radix_bits / 4` zero-padded lowercase hex digits.
    ///
    /// `radix_bits` must be a multiple of 8 no larger than 32.
    Hex { radix_bits: u32 },
    /// Each unit reduced modulo 5 and mapped onto [`CAT_ALPHABET`].
    CatAlphabet,
}

impl Encoding {
    /// Number of output characters produced per working-array unit.
    pub fn chars_per_unit(self) -> usize {
        match self {
            Encoding::Hex { radix_bits } => (radix_bits / 4) as usize,
            Encoding::CatAlphabet => 1,
        }
    }

    /// Information carried by one working-array unit, in bits.
    pub fn bits_per_unit(self) -> f64 {
        match self {
            Encoding::Hex { radix_bits } => radix_bits as f64,
            Encoding::CatAlphabet => (CAT_TABLE.len() as f64).log2(),
        }
    }

    /// Encodes the working array, drawing once from `stream2` per unit.
    ///
    /// # Parameters
    /// - `working`: The fully mixed working array.
    /// - `stream2`: The second hash stream, continuing after mixing.
    ///
    /// # Returns
    /// A string of `working.len() * chars_per_unit()` characters.
    pub fn encode(self, working: &[u32], stream2: &mut Mulberry32) -> String {
        trace!(units = working.len(), encoding = ?self, "encoding working array");
        match self {
            Encoding::Hex { radix_bits } => encode_hex(working, radix_bits, stream2),
            Encoding::CatAlphabet => encode_cat(working, stream2),
        }
    }
}

fn encode_hex(working: &[u32], radix_bits: u32, stream2: &mut Mulberry32) -> String {
    let width = (radix_bits / 8) as usize;
    let mut bytes = Vec::with_capacity(working.len() * width);
    for &unit in working {
        let mixed = unit ^ stream2.next_scaled(radix_bits);
        // Keeping only the low `width` bytes reduces modulo 2^radix_bits.
        bytes.extend_from_slice(&mixed.to_be_bytes()[4 - width..]);
    }
    hex::encode(bytes)
}

fn encode_cat(working: &[u32], stream2: &mut Mulberry32) -> String {
    working
        .iter()
        .map(|&unit| {
            let draw = (stream2.next_f64() * CAT_DRAW_SCALE).floor() as u32;
            let residue = ((unit ^ draw) % CAT_TABLE.len() as u32) as usize;
            char::from(CAT_TABLE[residue] + CAT_OFFSET)
        })
        .collect()
}
