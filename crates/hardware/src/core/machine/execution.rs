//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle. It performs the following:
//! 1. **Lifecycle:** Moves the machine through `Ready → Running → Halted | Faulted`.
//! 2. **Dispatch:** Decodes each word once and matches the typed instruction exhaustively.
//! 3. **Control Flow:** Advances the program counter or applies a taken branch or jump.
//! 4. **Budgeting:** Bounds `run` by a step count so runaway programs return control.
//!
//! An instruction either completes or leaves the machine untouched: operands and
//! targets are resolved before any register or memory write, so a faulting step
//! leaves the program counter on the faulting instruction.

use tracing::{debug, trace, warn};

use super::{Machine, State, Status};
use crate::common::{AccessType, Addr, Fault, MachineError};
use crate::isa::{Instruction, decode};

/// What the program counter does after an instruction retires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    /// Fall through to the next word.
    Next,
    /// Transfer control to the given address.
    Jump(Addr),
    /// Stop, leaving the program counter on the `HALT`.
    Halt,
}

impl Machine {
    /// Executes one instruction.
    ///
    /// On a terminal machine this is a no-op that returns the terminal status again;
    /// registers, memory and statistics are not touched.
    pub fn step(&mut self) -> Status {
        match self.state {
            State::Halted => return Status::Halted,
            State::Faulted(fault) => return Status::Fault(fault),
            State::Ready | State::Running => {}
        }
        self.state = State::Running;

        match self.execute_next() {
            Ok(Flow::Halt) => {
                self.state = State::Halted;
                debug!(pc = self.regs.pc.val(), steps = self.stats.steps, "halted");
                Status::Halted
            }
            Ok(_) => Status::Continue,
            Err(fault) => {
                self.state = State::Faulted(fault);
                warn!(%fault, steps = self.stats.steps, "machine faulted");
                Status::Fault(fault)
            }
        }
    }

    /// Steps until the machine halts, faults, or `max_steps` steps have executed.
    ///
    /// With `max_steps == 0` nothing executes and the current status is returned,
    /// which is `Continue` for a machine that is not yet terminal. A `Continue`
    /// result therefore means the budget ran out.
    pub fn run(&mut self, max_steps: u64) -> Status {
        let mut status = self.status();
        for _ in 0..max_steps {
            status = self.step();
            if status.is_terminal() {
                break;
            }
        }
        status
    }

    /// Runs like [`Machine::run`] but treats anything other than a halt as an error.
    ///
    /// # Returns
    ///
    /// The number of instructions executed by this call, including the `HALT`.
    ///
    /// # Errors
    ///
    /// * `MachineError::Fault` if the machine faulted (now or earlier).
    /// * `MachineError::StepLimitExceeded` if the budget ran out. The machine is
    ///   left running and may be resumed.
    pub fn run_until_halt(&mut self, max_steps: u64) -> Result<u64, MachineError> {
        let start = self.stats.steps;
        let status = self.run(max_steps);
        let steps = self.stats.steps - start;
        match status {
            Status::Halted => Ok(steps),
            Status::Fault(fault) => Err(fault.into()),
            Status::Continue => Err(MachineError::StepLimitExceeded { steps }),
        }
    }

    /// Fetches, decodes and executes the instruction at the program counter.
    fn execute_next(&mut self) -> Result<Flow, Fault> {
        let pc = self.regs.pc;
        let word = self.memory.read(pc, AccessType::Fetch)?;
        let inst = decode(word).ok_or(Fault::InvalidOpcode { pc, word })?;
        if self.trace {
            trace!(pc = pc.val(), word, ?inst, acc = self.regs.acc, "execute");
        }

        let flow = self.execute(inst)?;
        match flow {
            Flow::Next => self.regs.pc = pc.next(),
            Flow::Jump(target) => self.regs.pc = target,
            Flow::Halt => {}
        }
        self.stats.record(&inst, matches!(flow, Flow::Jump(_)));
        Ok(flow)
    }

    /// Applies a decoded instruction to registers and memory.
    fn execute(&mut self, inst: Instruction) -> Result<Flow, Fault> {
        let flow = match inst {
            Instruction::Halt => Flow::Halt,

            // Memory transfer
            Instruction::Load(operand) => {
                self.regs.acc = self.load_operand(operand)?;
                Flow::Next
            }
            Instruction::Store(target) => {
                let addr = self.store_address(target)?;
                self.memory.write(addr, self.regs.acc)?;
                Flow::Next
            }

            // Arithmetic
            Instruction::Add(operand) => {
                let value = self.alu_operand(operand)?;
                self.regs.acc = self.regs.acc.wrapping_add(value);
                Flow::Next
            }
            Instruction::Sub(operand) => {
                let value = self.alu_operand(operand)?;
                self.regs.acc = self.regs.acc.wrapping_sub(value);
                Flow::Next
            }
            Instruction::Cmp(operand) => {
                let value = self.alu_operand(operand)?;
                self.regs.flag = self.regs.acc == value;
                Flow::Next
            }

            // Bitwise
            Instruction::Bitwise(op, operand) => {
                let value = self.alu_operand(operand)?;
                self.regs.acc = op.apply(self.regs.acc, value);
                Flow::Next
            }
            Instruction::Bit(operand) => {
                let value = self.alu_operand(operand)?;
                self.regs.flag = (self.regs.acc & value) == 0;
                Flow::Next
            }

            // Read-modify-write
            Instruction::Zero(target) => {
                let addr = self.store_address(target)?;
                self.memory.write(addr, 0)?;
                Flow::Next
            }
            Instruction::Inc(target) => {
                let addr = self.store_address(target)?;
                let value = self.memory.read(addr, AccessType::Read)?;
                self.memory.write(addr, value.wrapping_add(1))?;
                Flow::Next
            }
            Instruction::Dec(target) => {
                let addr = self.store_address(target)?;
                let value = self.memory.read(addr, AccessType::Read)?;
                self.memory.write(addr, value.wrapping_sub(1))?;
                Flow::Next
            }

            Instruction::Noop(_) => Flow::Next,

            // Control flow
            Instruction::Breq(target) => {
                if self.regs.flag {
                    Flow::Jump(Addr::from(target))
                } else {
                    Flow::Next
                }
            }
            Instruction::Brne(target) => {
                if self.regs.flag {
                    Flow::Next
                } else {
                    Flow::Jump(Addr::from(target))
                }
            }
            Instruction::Jump(target) => Flow::Jump(Addr::from(target)),
        };
        Ok(flow)
    }
}
