//! Integration test crate for cliptrim.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It drives cliptrim-sync against cliptrim-core types through a
//! simulated playback engine.

#[cfg(test)]
mod sync;
