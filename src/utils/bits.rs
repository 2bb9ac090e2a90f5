//! 32-bit wraparound arithmetic helpers.
//!
//! Provides the half-word multiplication used by the Mulberry32 generator
//! and the radix scaling applied to raw generator output, so that every
//! intermediate value stays in exact 32-bit two's-complement semantics.

/// Multiplies two signed 32-bit integers with 32-bit wraparound.
///
/// Computes the product as schoolbook multiplication over 16-bit half-words:
/// `lo(a) * lo(b) + ((hi(a) * lo(b) + lo(a) * hi(b)) << 16)`, every step
/// wrapping at 32 bits. The `hi(a) * hi(b)` term only affects bits above 32
/// and is dropped.
///
/// # Parameters
/// - `a`: First operand.
/// - `b`: Second operand.
///
/// # Returns
/// The low 32 bits of `a * b`, interpreted as a signed integer.
pub fn imul(a: i32, b: i32) -> i32 {
    let (a, b) = (a as u32, b as u32);
    let a_high = a >> 16;
    let a_low = a & 0xFFFF;
    let b_high = b >> 16;
    let b_low = b & 0xFFFF;

    let cross = a_high
        .wrapping_mul(b_low)
        .wrapping_add(a_low.wrapping_mul(b_high))
        << 16;
    a_low.wrapping_mul(b_low).wrapping_add(cross) as i32
}

/// Scales a raw 32-bit draw into `[0, 2^bits)`.
///
/// Equivalent to `floor((raw / 2^32) * 2^bits)`. A scale of zero bits maps
/// every draw to 0.
///
/// # Parameters
/// - `raw`: Raw generator output.
/// - `bits`: Target width in bits (0..=32).
pub fn scale(raw: u32, bits: u32) -> u32 {
    match bits {
        0 => 0,
        b if b >= 32 => raw,
        _ => raw >> (32 - bits),
    }
}
