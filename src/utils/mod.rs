//! Low-level helpers shared by the generator, mixer and encoder.

pub mod bits;
pub mod converter;
pub mod spin;
