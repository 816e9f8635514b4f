//! # Unit Components
//!
//! Organizes the tests by the crate module they exercise: shared types, the
//! machine core, the instruction set, and the simulation layer.



/// Tests for the machine: instruction semantics, lifecycle and memory.
pub mod core;

/// Tests for instruction field extraction, decoding and encoding.
pub mod isa;

/// Tests for the loader, the built-in programs and the simulator driver.
pub mod sim;
