//! Pure number-classification logic.
//!
//! Parsing of the raw `number` query value, the elementary property checks
//! (primality, perfection, Armstrong-ness, parity, digit sum) and the
//! serializable classification result. Nothing in this crate performs I/O.

pub mod classification;
pub mod error;
pub mod input;
pub mod number;
