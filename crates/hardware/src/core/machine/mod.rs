//! Machine Definition and Initialization.
//!
//! This module defines the `Machine`, which owns the entire processor state:
//! 1. **Registers:** Accumulator, program counter and equal flag.
//! 2. **Memory:** 256 words, mutated only by `STOR` and by `load`.
//! 3. **Lifecycle:** The `Ready → Running → Halted | Faulted` state machine.
//! 4. **Statistics:** Per-class counts of retired instructions.

/// Fetch-decode-execute loop and budgeted runs.
pub mod execution;

/// Word memory and operand access helpers.
pub mod memory;

use std::ops::Range;

use tracing::debug;

use self::memory::Memory;
use crate::common::{AccessType, Addr, Fault, MachineError, RegisterFile};
use crate::stats::ExecStats;

/// Lifecycle state of a machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// Constructed or reset; no instruction executed yet.
    Ready,
    /// At least one instruction executed and the machine has not stopped.
    Running,
    /// A `HALT` was executed. Terminal.
    Halted,
    /// Execution stopped on a fault. Terminal.
    Faulted(Fault),
}

impl State {
    /// Returns `true` for `Halted` and `Faulted`.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Halted | Self::Faulted(_))
    }
}

/// Result of a `step` or `run`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// The machine can keep executing.
    Continue,
    /// The machine has halted.
    Halted,
    /// The machine has faulted.
    Fault(Fault),
}

impl Status {
    /// Returns `true` if no further instruction will execute.
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Continue)
    }
}

/// A single-accumulator CPU with 256 words of memory.
#[derive(Clone, Debug)]
pub struct Machine {
    pub(crate) regs: RegisterFile,
    pub(crate) memory: Memory,
    pub(crate) state: State,
    pub(crate) stats: ExecStats,
    /// Emit a `trace` event for every executed instruction.
    pub(crate) trace: bool,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

impl Machine {
    /// Creates a machine with zeroed memory and registers, ready to run from `$00`.
    pub fn new() -> Self {
        Self {
            regs: RegisterFile::new(),
            memory: Memory::new(),
            state: State::Ready,
            stats: ExecStats::default(),
            trace: false,
        }
    }

    /// Copies an image into memory starting at `origin`.
    ///
    /// The load is all-or-nothing: if the image does not fit, memory is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `MachineError::LoadOutOfBounds` if `origin` is outside memory or the
    /// image runs past the last word.
    pub fn load(&mut self, image: &[u16], origin: Addr) -> Result<(), MachineError> {
        self.memory.load(image, origin)?;
        debug!(origin = origin.val(), words = image.len(), "image loaded");
        Ok(())
    }

    /// Returns the machine to its freshly constructed state.
    ///
    /// Registers, memory and statistics are cleared. The trace setting is kept.
    pub fn reset(&mut self) {
        self.regs.reset();
        self.memory.clear();
        self.stats = ExecStats::default();
        self.state = State::Ready;
    }

    /// Enables or disables the per-instruction trace.
    pub fn set_trace(&mut self, enabled: bool) {
        self.trace = enabled;
    }

    /// Returns `true` if every executed instruction is traced.
    pub const fn trace_enabled(&self) -> bool {
        self.trace
    }

    /// Returns the current lifecycle state.
    pub const fn state(&self) -> State {
        self.state
    }

    /// Returns the status a `step` would report if the machine were not stepped.
    pub const fn status(&self) -> Status {
        match self.state {
            State::Ready | State::Running => Status::Continue,
            State::Halted => Status::Halted,
            State::Faulted(fault) => Status::Fault(fault),
        }
    }

    /// Returns a copy of the register file.
    pub const fn registers(&self) -> RegisterFile {
        self.regs
    }

    /// Returns the accumulator.
    pub const fn accumulator(&self) -> u16 {
        self.regs.acc
    }

    /// Returns the program counter.
    pub const fn pc(&self) -> Addr {
        self.regs.pc
    }

    /// Returns the equal flag.
    pub const fn flag(&self) -> bool {
        self.regs.flag
    }

    /// Sets the accumulator.
    pub fn set_accumulator(&mut self, value: u16) {
        self.regs.acc = value;
    }

    /// Sets the program counter. Range is checked on the next fetch.
    pub fn set_pc(&mut self, pc: Addr) {
        self.regs.pc = pc;
    }

    /// Reads one memory word.
    ///
    /// # Errors
    ///
    /// Returns `Fault::OutOfBounds` if `addr` is outside memory.
    pub fn read(&self, addr: Addr) -> Result<u16, Fault> {
        self.memory.read(addr, AccessType::Read)
    }

    /// Writes one memory word.
    ///
    /// # Errors
    ///
    /// Returns `Fault::OutOfBounds` if `addr` is outside memory.
    pub fn write(&mut self, addr: Addr, value: u16) -> Result<(), Fault> {
        self.memory.write(addr, value)
    }

    /// Returns a view of memory words by index, or `None` if the range leaves memory.
    pub fn memory_range(&self, range: Range<usize>) -> Option<&[u16]> {
        self.memory.as_slice().get(range)
    }

    /// Returns the execution statistics collected so far.
    pub const fn stats(&self) -> &ExecStats {
        &self.stats
    }
}
