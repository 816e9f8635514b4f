//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction for the three instruction fields and the typed
//! `Instruction` value the machine executes. Each variant only admits the
//! addressing modes that have an encoding, so an `Instruction` always encodes.

use crate::common::constants::{MODE_SHIFT, NIBBLE_MASK, OPCODE_SHIFT, OPERAND_MASK};

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode family (bits 12-15).
    fn opcode(&self) -> u8;

    /// Extracts the addressing mode / sub-opcode (bits 8-11).
    fn mode(&self) -> u8;

    /// Extracts the operand byte (bits 0-7).
    fn operand(&self) -> u8;
}

impl InstructionBits for u16 {
    #[inline(always)]
    fn opcode(&self) -> u8 {
        ((self >> OPCODE_SHIFT) & NIBBLE_MASK) as u8
    }

    #[inline(always)]
    fn mode(&self) -> u8 {
        ((self >> MODE_SHIFT) & NIBBLE_MASK) as u8
    }

    #[inline(always)]
    fn operand(&self) -> u8 {
        (self & OPERAND_MASK) as u8
    }
}

/// Source operand of `LOAD`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    /// `#$xx`: the operand byte itself.
    Immediate(u8),
    /// `$xx`: the contents of the cell at the operand address.
    Direct(u8),
    /// `($xx)`: the contents of the cell whose address is held at the operand address.
    Indirect(u8),
}

/// Destination of `STOR`, and the cell updated by `ZERO`, `INC` and `DEC`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StoreTarget {
    /// `$xx`: the cell at the operand address.
    Direct(u8),
    /// `($xx)`: the cell whose address is held at the operand address.
    ///
    /// The pointer cell itself is not modified.
    Indirect(u8),
}

/// Second operand of the arithmetic, compare and bitwise instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOperand {
    /// `#$xx`: the operand byte itself.
    Immediate(u8),
    /// `$xx`: the contents of the cell at the operand address.
    Direct(u8),
}

/// Accumulator operations of the bitwise family.
///
/// Shift and rotate amounts are taken from the operand value. A logical shift by
/// 16 or more clears the accumulator; rotates use the amount modulo 16.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitwiseOp {
    /// `acc := acc & value`.
    And,
    /// `acc := acc | value`.
    Or,
    /// `acc := acc ^ value`.
    Xor,
    /// `acc := acc << value`.
    Lsl,
    /// `acc := acc >> value`.
    Lsr,
    /// `acc := acc rotated left by value`.
    Rol,
    /// `acc := acc rotated right by value`.
    Ror,
}

impl BitwiseOp {
    /// Applies the operation to the accumulator.
    pub const fn apply(self, acc: u16, value: u16) -> u16 {
        match self {
            Self::And => acc & value,
            Self::Or => acc | value,
            Self::Xor => acc ^ value,
            Self::Lsl => match acc.checked_shl(value as u32) {
                Some(v) => v,
                None => 0,
            },
            Self::Lsr => match acc.checked_shr(value as u32) {
                Some(v) => v,
                None => 0,
            },
            Self::Rol => acc.rotate_left(value as u32),
            Self::Ror => acc.rotate_right(value as u32),
        }
    }
}

/// A decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Stop execution. The program counter is left pointing at the `HALT`.
    Halt,
    /// `acc := value`.
    Load(Operand),
    /// `cell := acc`.
    Store(StoreTarget),
    /// `acc := acc + value`, wrapping at 16 bits.
    Add(AluOperand),
    /// `acc := acc - value`, wrapping at 16 bits.
    Sub(AluOperand),
    /// `flag := acc == value`.
    Cmp(AluOperand),
    /// Branch to the target if the flag is set.
    Breq(u8),
    /// Branch to the target if the flag is clear.
    Brne(u8),
    /// Unconditional jump.
    Jump(u8),
    /// Bitwise or shift operation on the accumulator.
    Bitwise(BitwiseOp, AluOperand),
    /// `flag := (acc & value) == 0`. The accumulator is unchanged.
    Bit(AluOperand),
    /// `cell := 0`.
    Zero(StoreTarget),
    /// `cell := cell + 1`, wrapping at 16 bits.
    Inc(StoreTarget),
    /// `cell := cell - 1`, wrapping at 16 bits.
    Dec(StoreTarget),
    /// Do nothing. The operand is a wait count with no effect on this machine.
    Noop(u8),
}
