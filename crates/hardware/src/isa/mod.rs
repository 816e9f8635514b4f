//! Instruction Set Architecture (ISA) Definitions.
//!
//! Every instruction is a single 16-bit word: a 4-bit opcode family, a 4-bit
//! addressing mode and an 8-bit operand. The families are:
//!
//! * `0x0`: `HALT`.
//! * `0x1`: memory transfer (`LOAD`, `STOR`).
//! * `0x2`: arithmetic and compare (`ADD`, `SUB`, `CMP`).
//! * `0x3`: conditional branches (`BREQ`, `BRNE`).
//! * `0x4`: unconditional jump (`JUMP`).
//! * `0x5`: bitwise and shifts (`AND`, `BIT`, `OR`, `XOR`, `LSL`, `LSR`, `ROL`, `ROR`).
//! * `0x6`: read-modify-write on memory (`ZERO`, `INC`, `DEC`).
//! * `0xF`: `NOOP`.

/// Instruction decoding and encoding.
pub mod decode;

/// Decoded instruction types and bit extraction utilities.
pub mod instruction;

/// Opcode family and full high-byte constants.
pub mod opcodes;

pub use decode::{decode, encode};
pub use instruction::{
    AluOperand, BitwiseOp, Instruction, InstructionBits, Operand, StoreTarget,
};
