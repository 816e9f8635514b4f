//! Simulation utilities and program loading.
//!
//! Provides the textual image loader, the built-in programs, and a driver that
//! wires a `Machine` to a `Config`.

/// Hex image parsing and file loading.
pub mod loader;

/// Built-in program images.
pub mod programs;

/// Configured run driver.
pub mod simulator;

pub use simulator::{RunSummary, Simulator};
