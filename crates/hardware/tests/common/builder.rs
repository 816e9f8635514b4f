//! Instruction builders.
//!
//! Tests describe programs as typed `Instruction`s and encode them with the
//! crate's own encoder, so no test depends on hand-written opcode numbers except
//! the decode tests that check those numbers directly.

use accsim_core::isa::{AluOperand, BitwiseOp, Instruction, Operand, StoreTarget, encode};

/// Encodes a sequence of instructions into image words.
pub fn assemble(program: &[Instruction]) -> Vec<u16> {
    program.iter().map(|&inst| encode(inst)).collect()
}

/// `LOAD #v`.
pub const fn load_imm(v: u8) -> Instruction {
    Instruction::Load(Operand::Immediate(v))
}

/// `LOAD $a`.
pub const fn load(a: u8) -> Instruction {
    Instruction::Load(Operand::Direct(a))
}

/// `LOAD ($a)`.
pub const fn load_ind(a: u8) -> Instruction {
    Instruction::Load(Operand::Indirect(a))
}

/// `STOR $a`.
pub const fn stor(a: u8) -> Instruction {
    Instruction::Store(StoreTarget::Direct(a))
}

/// `STOR ($a)`.
pub const fn stor_ind(a: u8) -> Instruction {
    Instruction::Store(StoreTarget::Indirect(a))
}

/// `ADD #v`.
pub const fn add_imm(v: u8) -> Instruction {
    Instruction::Add(AluOperand::Immediate(v))
}

/// `ADD $a`.
pub const fn add(a: u8) -> Instruction {
    Instruction::Add(AluOperand::Direct(a))
}

/// `SUB #v`.
pub const fn sub_imm(v: u8) -> Instruction {
    Instruction::Sub(AluOperand::Immediate(v))
}

/// `CMP #v`.
pub const fn cmp_imm(v: u8) -> Instruction {
    Instruction::Cmp(AluOperand::Immediate(v))
}

/// `CMP $a`.
pub const fn cmp(a: u8) -> Instruction {
    Instruction::Cmp(AluOperand::Direct(a))
}

/// Bitwise operation with an immediate operand, e.g. `AND #v`.
pub const fn bitwise_imm(op: BitwiseOp, v: u8) -> Instruction {
    Instruction::Bitwise(op, AluOperand::Immediate(v))
}

/// Bitwise operation with a direct operand, e.g. `AND $a`.
pub const fn bitwise(op: BitwiseOp, a: u8) -> Instruction {
    Instruction::Bitwise(op, AluOperand::Direct(a))
}

/// `BIT #v`.
pub const fn bit_imm(v: u8) -> Instruction {
    Instruction::Bit(AluOperand::Immediate(v))
}

/// `ZERO $a`.
pub const fn zero(a: u8) -> Instruction {
    Instruction::Zero(StoreTarget::Direct(a))
}

/// `INC $a`.
pub const fn inc(a: u8) -> Instruction {
    Instruction::Inc(StoreTarget::Direct(a))
}

/// `DEC $a`.
pub const fn dec(a: u8) -> Instruction {
    Instruction::Dec(StoreTarget::Direct(a))
}
