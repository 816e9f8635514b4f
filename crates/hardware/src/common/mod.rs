//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every other part of the crate:
//! 1. **Address Type:** A strong type for word addresses into machine memory.
//! 2. **Constants:** Memory geometry and instruction field layout.
//! 3. **Memory Access:** Classification of accesses (Fetch/Read/Write) used in fault reports.
//! 4. **Error Handling:** Per-step faults and the crate-level error type.
//! 5. **Register Management:** The accumulator, program counter and flag.

/// Address type definition.
pub mod addr;

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Fault and error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use addr::Addr;
pub use constants::MEMORY_WORDS;
pub use data::AccessType;
pub use error::{Fault, MachineError};
pub use reg::RegisterFile;
