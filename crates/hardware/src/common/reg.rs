//! Register File.
//!
//! The machine has exactly three pieces of architectural state outside memory: a
//! 16-bit accumulator, the program counter and a single zero/equal flag written by
//! `CMP` and consumed by the conditional branches.

use std::fmt;

use super::addr::Addr;

/// Architectural registers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    /// Accumulator; the implicit source and destination of every data instruction.
    pub acc: u16,
    /// Address of the next instruction to fetch.
    pub pc: Addr,
    /// Equal flag, set by `CMP` when the accumulator matches the operand.
    pub flag: bool,
}

impl RegisterFile {
    /// Creates a register file with every register cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every register.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for RegisterFile {
    /// Formats the registers as a single status line, e.g. `ACC=0x0001 PC=$05 Z=1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ACC={:#06x} PC={} Z={}",
            self.acc,
            self.pc,
            u8::from(self.flag)
        )
    }
}
