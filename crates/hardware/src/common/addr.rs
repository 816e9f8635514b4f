//! Word address type.
//!
//! Memory is word-addressed: address `n` names the `n`-th 16-bit cell. Operands
//! encoded in an instruction are only eight bits wide and are therefore always in
//! range, but pointer cells hold full 16-bit words and the program counter can run
//! off the end of memory, so an `Addr` is allowed to hold values that do not map to
//! a cell. Range checking happens at the point of access.

use std::fmt;

use super::constants::MEMORY_WORDS;

/// A word address in machine memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Addr(pub u16);

impl Addr {
    /// Creates a new address from a raw 16-bit value.
    #[inline(always)]
    pub const fn new(addr: u16) -> Self {
        Self(addr)
    }

    /// Returns the raw 16-bit address value.
    #[inline(always)]
    pub const fn val(self) -> u16 {
        self.0
    }

    /// Returns the memory index for this address, or `None` if it lies outside memory.
    #[inline(always)]
    pub const fn index(self) -> Option<usize> {
        let idx = self.0 as usize;
        if idx < MEMORY_WORDS { Some(idx) } else { None }
    }

    /// Returns the address immediately following this one, wrapping at `0xFFFF`.
    #[inline(always)]
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl From<u8> for Addr {
    fn from(operand: u8) -> Self {
        Self(u16::from(operand))
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:02X}", self.0)
    }
}
