use accsim_core::common::Addr;
use accsim_core::core::{Machine, Status};
use accsim_core::isa::Instruction;

use super::builder::assemble;

/// Owns a machine and provides fluent setup for a single test.
#[derive(Debug)]
pub struct TestContext {
    /// Machine under test.
    pub machine: Machine,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Creates a context with a fresh machine and test log capture installed.
    pub fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("accsim_core=trace")
            .try_init();
        let mut machine = Machine::new();
        machine.set_trace(true);
        Self { machine }
    }

    /// Encodes and loads `program` at `origin` and points the program counter at it.
    pub fn load_program(mut self, origin: u16, program: &[Instruction]) -> Self {
        self.machine
            .load(&assemble(program), Addr(origin))
            .unwrap();
        self.machine.set_pc(Addr(origin));
        self
    }

    /// Stores a data word before the run.
    pub fn with_word(mut self, addr: u16, value: u16) -> Self {
        self.machine.write(Addr(addr), value).unwrap();
        self
    }

    /// Sets the accumulator before the run.
    pub fn with_acc(mut self, value: u16) -> Self {
        self.machine.set_accumulator(value);
        self
    }

    /// Executes a single instruction.
    pub fn step(&mut self) -> Status {
        self.machine.step()
    }

    /// Runs with a step budget.
    pub fn run(&mut self, max_steps: u64) -> Status {
        self.machine.run(max_steps)
    }

    /// Reads a memory word, panicking if it is out of range.
    pub fn word(&self, addr: u16) -> u16 {
        self.machine.read(Addr(addr)).unwrap()
    }

    /// Returns the program counter as a raw value.
    pub fn pc(&self) -> u16 {
        self.machine.pc().val()
    }

    /// Returns the accumulator.
    pub fn acc(&self) -> u16 {
        self.machine.accumulator()
    }
}
