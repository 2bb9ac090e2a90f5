//! Random number generation subsystem for SCHA.
//!
//! Provides the Mulberry32 pseudorandom stream and the derivation of its
//! seeds from the input text.

pub mod mulberry32;
pub mod seed;
