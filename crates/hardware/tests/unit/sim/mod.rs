//! Simulation layer tests.


/// Hex image parsing and file loading.
pub mod loader;
