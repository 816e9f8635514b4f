//! Instruction Decoder.
//!
//! Decoding is a two-level dispatch: the opcode nibble picks the family, the mode
//! nibble picks the variant inside it. Words whose pair is not in the table do not
//! decode; the machine turns that into an `InvalidOpcode` fault carrying the word
//! and its address.

use crate::isa::instruction::{
    AluOperand, BitwiseOp, Instruction, InstructionBits, Operand, StoreTarget,
};
use crate::isa::opcodes;

/// Decodes a 16-bit instruction word.
///
/// # Arguments
///
/// * `word` - The raw instruction word.
///
/// # Returns
///
/// The decoded instruction, or `None` if the opcode/mode pair is unknown.
pub fn decode(word: u16) -> Option<Instruction> {
    let operand = word.operand();
    let inst = match (word.opcode(), word.mode()) {
        (opcodes::FAMILY_SYSTEM, 0x0) => Instruction::Halt,

        (opcodes::FAMILY_MEMORY, 0x0) => Instruction::Load(Operand::Immediate(operand)),
        (opcodes::FAMILY_MEMORY, 0x1) => Instruction::Load(Operand::Direct(operand)),
        (opcodes::FAMILY_MEMORY, 0x2) => Instruction::Store(StoreTarget::Direct(operand)),
        (opcodes::FAMILY_MEMORY, 0x3) => Instruction::Store(StoreTarget::Indirect(operand)),
        (opcodes::FAMILY_MEMORY, 0x4) => Instruction::Load(Operand::Indirect(operand)),

        (opcodes::FAMILY_ALU, 0x0) => Instruction::Add(AluOperand::Immediate(operand)),
        (opcodes::FAMILY_ALU, 0x1) => Instruction::Add(AluOperand::Direct(operand)),
        (opcodes::FAMILY_ALU, 0x4) => Instruction::Sub(AluOperand::Immediate(operand)),
        (opcodes::FAMILY_ALU, 0x5) => Instruction::Sub(AluOperand::Direct(operand)),
        (opcodes::FAMILY_ALU, 0x6) => Instruction::Cmp(AluOperand::Immediate(operand)),
        (opcodes::FAMILY_ALU, 0x7) => Instruction::Cmp(AluOperand::Direct(operand)),

        (opcodes::FAMILY_BRANCH, 0x0) => Instruction::Breq(operand),
        (opcodes::FAMILY_BRANCH, 0x2) => Instruction::Brne(operand),

        (opcodes::FAMILY_JUMP, 0x0) => Instruction::Jump(operand),

        (opcodes::FAMILY_BITWISE, mode) => {
            let source = if mode & 1 == 0 {
                AluOperand::Immediate(operand)
            } else {
                AluOperand::Direct(operand)
            };
            match mode >> 1 {
                0 => Instruction::Bitwise(BitwiseOp::And, source),
                1 => Instruction::Bit(source),
                2 => Instruction::Bitwise(BitwiseOp::Or, source),
                3 => Instruction::Bitwise(BitwiseOp::Xor, source),
                4 => Instruction::Bitwise(BitwiseOp::Lsl, source),
                5 => Instruction::Bitwise(BitwiseOp::Lsr, source),
                6 => Instruction::Bitwise(BitwiseOp::Rol, source),
                _ => Instruction::Bitwise(BitwiseOp::Ror, source),
            }
        }

        (opcodes::FAMILY_RMW, mode @ 0x0..=0x5) => {
            let target = if mode & 1 == 0 {
                StoreTarget::Direct(operand)
            } else {
                StoreTarget::Indirect(operand)
            };
            match mode >> 1 {
                0 => Instruction::Zero(target),
                1 => Instruction::Inc(target),
                _ => Instruction::Dec(target),
            }
        }

        (opcodes::FAMILY_WAIT, 0x2) => Instruction::Noop(operand),

        _ => return None,
    };
    Some(inst)
}

/// Selects the immediate or direct high byte of a two-form instruction.
const fn two_form(operand: AluOperand, imm: u8, dir: u8) -> (u8, u8) {
    match operand {
        AluOperand::Immediate(v) => (imm, v),
        AluOperand::Direct(a) => (dir, a),
    }
}

/// Selects the direct or indirect high byte of a read-modify-write instruction.
const fn rmw_form(target: StoreTarget, dir: u8, ind: u8) -> (u8, u8) {
    match target {
        StoreTarget::Direct(a) => (dir, a),
        StoreTarget::Indirect(a) => (ind, a),
    }
}

/// Encodes an instruction back into its 16-bit word.
///
/// `HALT` encodes with a zero operand.
pub const fn encode(inst: Instruction) -> u16 {
    let (high, operand) = match inst {
        Instruction::Halt => (opcodes::HALT, 0),
        Instruction::Load(Operand::Immediate(v)) => (opcodes::LOAD_IMM, v),
        Instruction::Load(Operand::Direct(a)) => (opcodes::LOAD_DIR, a),
        Instruction::Load(Operand::Indirect(a)) => (opcodes::LOAD_IND, a),
        Instruction::Store(StoreTarget::Direct(a)) => (opcodes::STOR_DIR, a),
        Instruction::Store(StoreTarget::Indirect(a)) => (opcodes::STOR_IND, a),
        Instruction::Add(AluOperand::Immediate(v)) => (opcodes::ADD_IMM, v),
        Instruction::Add(AluOperand::Direct(a)) => (opcodes::ADD_DIR, a),
        Instruction::Sub(AluOperand::Immediate(v)) => (opcodes::SUB_IMM, v),
        Instruction::Sub(AluOperand::Direct(a)) => (opcodes::SUB_DIR, a),
        Instruction::Cmp(AluOperand::Immediate(v)) => (opcodes::CMP_IMM, v),
        Instruction::Cmp(AluOperand::Direct(a)) => (opcodes::CMP_DIR, a),
        Instruction::Breq(t) => (opcodes::BREQ, t),
        Instruction::Brne(t) => (opcodes::BRNE, t),
        Instruction::Jump(t) => (opcodes::JUMP, t),
        Instruction::Bitwise(op, source) => match op {
            BitwiseOp::And => two_form(source, opcodes::AND_IMM, opcodes::AND_DIR),
            BitwiseOp::Or => two_form(source, opcodes::OR_IMM, opcodes::OR_DIR),
            BitwiseOp::Xor => two_form(source, opcodes::XOR_IMM, opcodes::XOR_DIR),
            BitwiseOp::Lsl => two_form(source, opcodes::LSL_IMM, opcodes::LSL_DIR),
            BitwiseOp::Lsr => two_form(source, opcodes::LSR_IMM, opcodes::LSR_DIR),
            BitwiseOp::Rol => two_form(source, opcodes::ROL_IMM, opcodes::ROL_DIR),
            BitwiseOp::Ror => two_form(source, opcodes::ROR_IMM, opcodes::ROR_DIR),
        },
        Instruction::Bit(source) => two_form(source, opcodes::BIT_IMM, opcodes::BIT_DIR),
        Instruction::Zero(target) => rmw_form(target, opcodes::ZERO_DIR, opcodes::ZERO_IND),
        Instruction::Inc(target) => rmw_form(target, opcodes::INC_DIR, opcodes::INC_IND),
        Instruction::Dec(target) => rmw_form(target, opcodes::DEC_DIR, opcodes::DEC_IND),
        Instruction::Noop(wait) => (opcodes::NOOP, wait),
    };
    (high as u16) << 8 | operand as u16
}
