//! Execution statistics collection and reporting.
//!
//! This module tracks what a run actually did. It provides:
//! 1. **Step count:** Instructions retired, including the final `HALT`.
//! 2. **Instruction mix:** Counts by class (load, store, ALU, compare, control).
//! 3. **Branch outcomes:** Taken and not-taken conditional branches.
//!
//! Faulting instructions do not retire and are not counted.

use std::fmt::Write as _;

use crate::isa::Instruction;

/// Per-class counts of retired instructions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecStats {
    /// Instructions retired.
    pub steps: u64,
    /// `LOAD` instructions retired.
    pub loads: u64,
    /// `STOR` instructions retired.
    pub stores: u64,
    /// `ADD` and `SUB` instructions retired.
    pub alu: u64,
    /// `CMP` and `BIT` instructions retired.
    pub compares: u64,
    /// Bitwise and shift instructions retired.
    pub logic: u64,
    /// `ZERO`, `INC` and `DEC` instructions retired.
    pub read_modify_writes: u64,
    /// Conditional branches that transferred control.
    pub branches_taken: u64,
    /// Conditional branches that fell through.
    pub branches_not_taken: u64,
    /// `JUMP` instructions retired.
    pub jumps: u64,
    /// `HALT` instructions retired (at most one per run).
    pub halts: u64,
    /// `NOOP` instructions retired.
    pub noops: u64,
}

impl ExecStats {
    /// Records one retired instruction.
    ///
    /// # Arguments
    ///
    /// * `inst` - The instruction that retired.
    /// * `taken` - Whether it transferred control (ignored for non-branches).
    pub fn record(&mut self, inst: &Instruction, taken: bool) {
        self.steps += 1;
        match inst {
            Instruction::Halt => self.halts += 1,
            Instruction::Load(_) => self.loads += 1,
            Instruction::Store(_) => self.stores += 1,
            Instruction::Add(_) | Instruction::Sub(_) => self.alu += 1,
            Instruction::Cmp(_) | Instruction::Bit(_) => self.compares += 1,
            Instruction::Bitwise(..) => self.logic += 1,
            Instruction::Zero(_) | Instruction::Inc(_) | Instruction::Dec(_) => {
                self.read_modify_writes += 1;
            }
            Instruction::Noop(_) => self.noops += 1,
            Instruction::Breq(_) | Instruction::Brne(_) => {
                if taken {
                    self.branches_taken += 1;
                } else {
                    self.branches_not_taken += 1;
                }
            }
            Instruction::Jump(_) => self.jumps += 1,
        }
    }

    /// Total conditional branches retired.
    pub const fn branches(&self) -> u64 {
        self.branches_taken + self.branches_not_taken
    }

    /// Renders the statistics as an aligned text report.
    pub fn summary(&self) -> String {
        let steps = self.steps.max(1) as f64;
        let pct = |n: u64| (n as f64 / steps) * 100.0;
        let mut out = String::new();
        let _ = writeln!(out, "==========================================");
        let _ = writeln!(out, "EXECUTION STATISTICS");
        let _ = writeln!(out, "==========================================");
        let _ = writeln!(out, "steps                    {}", self.steps);
        let _ = writeln!(out, "------------------------------------------");
        let _ = writeln!(out, "INSTRUCTION MIX");
        for (name, count) in [
            ("op.load", self.loads),
            ("op.store", self.stores),
            ("op.alu", self.alu),
            ("op.compare", self.compares),
            ("op.logic", self.logic),
            ("op.rmw", self.read_modify_writes),
            ("op.branch", self.branches()),
            ("op.jump", self.jumps),
            ("op.halt", self.halts),
            ("op.noop", self.noops),
        ] {
            let _ = writeln!(out, "  {name:<22} {count} ({:.2}%)", pct(count));
        }
        let _ = writeln!(out, "------------------------------------------");
        let _ = writeln!(out, "BRANCHES");
        let _ = writeln!(out, "  branch.taken           {}", self.branches_taken);
        let _ = writeln!(out, "  branch.not_taken       {}", self.branches_not_taken);
        out
    }
}
