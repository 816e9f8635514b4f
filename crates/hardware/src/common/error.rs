//! Fault and Error definitions.
//!
//! This module defines how execution failures are reported. It provides:
//! 1. **Faults:** The reason a single `step` stopped the machine (decode or bounds failure).
//! 2. **Machine Errors:** Crate-level errors returned from loading and budgeted runs.
//!
//! Faults are terminal: once a machine faults it stays faulted and reports the same
//! fault on every later step.

use thiserror::Error;

use super::addr::Addr;
use super::data::AccessType;

/// Reason the machine stopped with a fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum Fault {
    /// The fetched word does not name a known opcode/mode pair.
    ///
    /// `pc` is the address the word was fetched from.
    #[error("invalid opcode {word:#06x} at {pc}")]
    InvalidOpcode {
        /// Address of the offending instruction.
        pc: Addr,
        /// Raw instruction word.
        word: u16,
    },

    /// An access touched an address outside the 256-word memory.
    #[error("out-of-bounds {access} at {addr}")]
    OutOfBounds {
        /// The address that was accessed.
        addr: Addr,
        /// Which kind of access it was.
        access: AccessType,
    },
}

/// Errors surfaced by the machine and the simulation driver.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MachineError {
    /// Execution stopped with a fault.
    #[error(transparent)]
    Fault(#[from] Fault),

    /// An image did not fit in memory starting at its origin.
    ///
    /// Memory is left untouched when this is returned.
    #[error("image of {len} words does not fit in memory at origin {origin}")]
    LoadOutOfBounds {
        /// Requested load address.
        origin: Addr,
        /// Length of the rejected image in words.
        len: usize,
    },

    /// The step budget ran out before the program halted.
    ///
    /// The machine itself is not faulted and may be stepped further.
    #[error("step limit of {steps} exceeded without halting")]
    StepLimitExceeded {
        /// Number of steps executed before giving up.
        steps: u64,
    },
}

impl MachineError {
    /// Returns `true` if this error leaves the machine in a terminal state.
    pub const fn is_fault(&self) -> bool {
        matches!(self, Self::Fault(_))
    }
}
