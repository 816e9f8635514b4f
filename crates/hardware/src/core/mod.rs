//! Core processor implementation.
//!
//! This module contains the `Machine`: the register file, the 256-word memory it
//! owns, and the fetch-decode-execute loop that drives them.

/// Machine definition, execution loop and memory.
pub mod machine;

pub use self::machine::{Machine, State, Status};
pub use self::machine::memory::Memory;
