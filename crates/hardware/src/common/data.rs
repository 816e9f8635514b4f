//! Memory Access Types.
//!
//! Every out-of-bounds fault records which kind of access tripped it, so a report
//! can tell a runaway program counter apart from a bad pointer cell.

use std::fmt;

/// Type of memory access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// Instruction fetch at the program counter.
    Fetch,

    /// Data read, including the pointer-cell read of an indirect operand.
    Read,

    /// Data write by a STOR instruction.
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fetch => "fetch",
            Self::Read => "read",
            Self::Write => "write",
        };
        f.write_str(name)
    }
}
