//! Text-to-code-unit conversion.
//!
//! The hash treats its input as a sequence of UTF-16 code units, so that
//! characters outside the Basic Multilingual Plane contribute two units
//! (a surrogate pair) rather than their UTF-8 bytes.

/// Converts a string slice into its UTF-16 code units.
///
/// # Parameters
/// - `text`: The text to convert.
///
/// # Returns
/// A `Vec<u16>` with one entry per UTF-16 code unit.
pub fn to_code_units(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}
