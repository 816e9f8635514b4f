//! Accumulator CPU simulator library.
//!
//! This crate implements a simulator for a 16-bit single-accumulator CPU with the following:
//! 1. **Core:** The `Machine` state machine (Ready, Running, Halted, Faulted) and its 256-word memory.
//! 2. **ISA:** Fixed-width instruction words decoded into a typed `Instruction`.
//! 3. **Simulation:** Hex image loader, built-in programs, and a configured run driver.
//! 4. **Support:** Configuration, execution statistics, and structured faults.
//!
//! # Examples
//!
//! ```
//! use accsim_core::common::Addr;
//! use accsim_core::core::{Machine, Status};
//! use accsim_core::sim::programs::{FIBONACCI, FIB_EXPECTED};
//!
//! let mut machine = Machine::new();
//! machine.load(&FIBONACCI, Addr(0)).unwrap();
//! assert_eq!(machine.run(1_000), Status::Halted);
//! assert_eq!(machine.memory_range(0x80..0x90).unwrap(), &FIB_EXPECTED[..]);
//! ```

/// Common types and constants (addresses, registers, faults, access types).
pub mod common;
/// Simulator configuration (defaults and JSON structures).
pub mod config;
/// Machine core (state machine, execution, memory).
pub mod core;
/// Instruction set (opcodes, decode, instruction types).
pub mod isa;
/// Image loader, built-in programs and run driver.
pub mod sim;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse from JSON.
pub use crate::config::Config;
/// Main machine type; holds registers, memory and stats.
pub use crate::core::Machine;
/// Configured run driver around a `Machine`.
pub use crate::sim::Simulator;
