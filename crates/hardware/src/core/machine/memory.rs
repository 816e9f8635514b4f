//! Word Memory and Operand Access.
//!
//! This module provides the machine's storage and the helpers that resolve operands
//! against it. It performs the following:
//! 1. **Storage:** A fixed array of 256 16-bit words.
//! 2. **Bounds Checking:** Every access is checked and reported with its access type.
//! 3. **Atomic Loading:** Images are validated against the remaining space before any copy.
//! 4. **Addressing Modes:** Immediate, direct and indirect operand resolution.

use super::Machine;
use crate::common::constants::MEMORY_WORDS;
use crate::common::{AccessType, Addr, Fault, MachineError};
use crate::isa::{AluOperand, Operand, StoreTarget};

/// Fixed-size word memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    cells: [u16; MEMORY_WORDS],
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Creates a zero-filled memory.
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_WORDS],
        }
    }

    /// Reads the word at `addr`.
    ///
    /// # Errors
    ///
    /// Returns `Fault::OutOfBounds` tagged with `access` if `addr` is outside memory.
    #[inline]
    pub fn read(&self, addr: Addr, access: AccessType) -> Result<u16, Fault> {
        addr.index()
            .map(|idx| self.cells[idx])
            .ok_or(Fault::OutOfBounds { addr, access })
    }

    /// Writes `value` to the word at `addr`.
    ///
    /// # Errors
    ///
    /// Returns `Fault::OutOfBounds` if `addr` is outside memory.
    #[inline]
    pub fn write(&mut self, addr: Addr, value: u16) -> Result<(), Fault> {
        let idx = addr.index().ok_or(Fault::OutOfBounds {
            addr,
            access: AccessType::Write,
        })?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Copies `image` into memory starting at `origin`.
    ///
    /// # Errors
    ///
    /// Returns `MachineError::LoadOutOfBounds` without touching memory if the image
    /// does not fit between `origin` and the end of memory.
    pub fn load(&mut self, image: &[u16], origin: Addr) -> Result<(), MachineError> {
        let err = MachineError::LoadOutOfBounds {
            origin,
            len: image.len(),
        };
        let start = origin.index().ok_or_else(|| err.clone())?;
        let end = start
            .checked_add(image.len())
            .filter(|&end| end <= MEMORY_WORDS)
            .ok_or(err)?;
        self.cells[start..end].copy_from_slice(image);
        Ok(())
    }

    /// Zero-fills memory.
    pub fn clear(&mut self) {
        self.cells = [0; MEMORY_WORDS];
    }

    /// Returns all words in address order.
    pub const fn as_slice(&self) -> &[u16] {
        &self.cells
    }
}

impl Machine {
    /// Resolves a pointer cell: reads the address stored at `cell`.
    fn pointer(&self, cell: u8) -> Result<Addr, Fault> {
        self.memory
            .read(Addr::from(cell), AccessType::Read)
            .map(Addr::new)
    }

    /// Resolves a `LOAD` operand to its value.
    pub(crate) fn load_operand(&self, operand: Operand) -> Result<u16, Fault> {
        match operand {
            Operand::Immediate(value) => Ok(u16::from(value)),
            Operand::Direct(cell) => self.memory.read(Addr::from(cell), AccessType::Read),
            Operand::Indirect(cell) => self.memory.read(self.pointer(cell)?, AccessType::Read),
        }
    }

    /// Resolves an `ADD`/`SUB`/`CMP` operand to its value.
    pub(crate) fn alu_operand(&self, operand: AluOperand) -> Result<u16, Fault> {
        match operand {
            AluOperand::Immediate(value) => Ok(u16::from(value)),
            AluOperand::Direct(cell) => self.memory.read(Addr::from(cell), AccessType::Read),
        }
    }

    /// Resolves a `STOR` target to the address that will be written.
    pub(crate) fn store_address(&self, target: StoreTarget) -> Result<Addr, Fault> {
        match target {
            StoreTarget::Direct(cell) => Ok(Addr::from(cell)),
            StoreTarget::Indirect(cell) => self.pointer(cell),
        }
    }
}
