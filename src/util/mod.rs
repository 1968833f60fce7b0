//! Helpers for working with instruction bytes.

pub mod binary;
pub mod nibbles;
