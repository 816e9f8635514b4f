//! Simulator: owns a machine together with the settings of a run.
//!
//! The machine itself only knows how to step; the simulator supplies the load
//! origin and the step budget from a `Config` and reports the outcome.

use tracing::{info, warn};

use crate::common::{Addr, MachineError};
use crate::config::Config;
use crate::core::Machine;

/// Outcome of a run that reached `HALT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Instructions executed, including the `HALT`.
    pub steps: u64,
    /// Accumulator at halt.
    pub accumulator: u16,
    /// Address of the `HALT` that stopped the run.
    pub pc: Addr,
}

/// Top-level simulator: machine state plus run settings.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// Machine being driven.
    pub machine: Machine,
    origin: Addr,
    max_steps: u64,
}

impl Simulator {
    /// Creates a simulator with a fresh machine configured by `config`.
    pub fn new(config: &Config) -> Self {
        let mut machine = Machine::new();
        machine.set_trace(config.general.trace_instructions);
        Self {
            machine,
            origin: Addr(config.image.origin),
            max_steps: config.general.max_steps,
        }
    }

    /// Returns the configured load origin.
    pub const fn origin(&self) -> Addr {
        self.origin
    }

    /// Returns the configured step budget.
    pub const fn max_steps(&self) -> u64 {
        self.max_steps
    }

    /// Loads an image at the configured origin and points the program counter at it.
    ///
    /// The machine is reset first, so a simulator that already halted or faulted
    /// runs the new image from a clean state.
    ///
    /// # Errors
    ///
    /// Returns `MachineError::LoadOutOfBounds` if the image does not fit. The
    /// machine is left reset.
    pub fn load(&mut self, image: &[u16]) -> Result<(), MachineError> {
        self.machine.reset();
        self.machine.load(image, self.origin)?;
        self.machine.set_pc(self.origin);
        Ok(())
    }

    /// Runs the machine to `HALT` within the configured budget.
    ///
    /// # Errors
    ///
    /// Returns the fault that stopped the machine, or
    /// `MachineError::StepLimitExceeded` if the budget ran out.
    pub fn run(&mut self) -> Result<RunSummary, MachineError> {
        match self.machine.run_until_halt(self.max_steps) {
            Ok(steps) => {
                let summary = RunSummary {
                    steps,
                    accumulator: self.machine.accumulator(),
                    pc: self.machine.pc(),
                };
                info!(
                    steps,
                    acc = summary.accumulator,
                    pc = summary.pc.val(),
                    "run complete"
                );
                Ok(summary)
            }
            Err(err) if err.is_fault() => {
                warn!(%err, pc = self.machine.pc().val(), "run faulted");
                Err(err)
            }
            Err(err) => {
                warn!(%err, steps = self.machine.stats().steps, "run stopped");
                Err(err)
            }
        }
    }
}
