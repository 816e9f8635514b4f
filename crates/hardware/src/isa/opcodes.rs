//! Opcode Definitions.
//!
//! The upper byte of an instruction word is `family << 4 | mode`. Within a family
//! the low bit of the mode generally distinguishes immediate (`0`) from memory (`1`)
//! operands; `STOR` has no immediate form, so its two encodings are direct and
//! indirect, and indirect `LOAD` takes the next free slot.
//!
//! The bitwise family uses every mode: bits 3-1 pick the operation and bit 0 the
//! operand kind. The read-modify-write family works on memory only, so its low bit
//! picks direct or indirect addressing instead.

/// Halt family.
pub const FAMILY_SYSTEM: u8 = 0x0;
/// Memory transfer family (`LOAD`, `STOR`).
pub const FAMILY_MEMORY: u8 = 0x1;
/// Arithmetic and compare family.
pub const FAMILY_ALU: u8 = 0x2;
/// Conditional branch family.
pub const FAMILY_BRANCH: u8 = 0x3;
/// Unconditional jump family.
pub const FAMILY_JUMP: u8 = 0x4;
/// Bitwise and shift family.
pub const FAMILY_BITWISE: u8 = 0x5;
/// Read-modify-write memory family (`ZERO`, `INC`, `DEC`).
pub const FAMILY_RMW: u8 = 0x6;
/// Idle family.
pub const FAMILY_WAIT: u8 = 0xF;

/// `HALT`.
pub const HALT: u8 = 0x00;

/// `LOAD #imm`.
pub const LOAD_IMM: u8 = 0x10;
/// `LOAD $addr`.
pub const LOAD_DIR: u8 = 0x11;
/// `STOR $addr`.
pub const STOR_DIR: u8 = 0x12;
/// `STOR ($addr)`.
pub const STOR_IND: u8 = 0x13;
/// `LOAD ($addr)`.
pub const LOAD_IND: u8 = 0x14;

/// `ADD #imm`.
pub const ADD_IMM: u8 = 0x20;
/// `ADD $addr`.
pub const ADD_DIR: u8 = 0x21;
/// `SUB #imm`.
pub const SUB_IMM: u8 = 0x24;
/// `SUB $addr`.
pub const SUB_DIR: u8 = 0x25;
/// `CMP #imm`.
pub const CMP_IMM: u8 = 0x26;
/// `CMP $addr`.
pub const CMP_DIR: u8 = 0x27;

/// `BREQ $addr`.
pub const BREQ: u8 = 0x30;
/// `BRNE $addr`.
pub const BRNE: u8 = 0x32;

/// `JUMP $addr`.
pub const JUMP: u8 = 0x40;

/// `AND #imm`.
pub const AND_IMM: u8 = 0x50;
/// `AND $addr`.
pub const AND_DIR: u8 = 0x51;
/// `BIT #imm`.
pub const BIT_IMM: u8 = 0x52;
/// `BIT $addr`.
pub const BIT_DIR: u8 = 0x53;
/// `OR #imm`.
pub const OR_IMM: u8 = 0x54;
/// `OR $addr`.
pub const OR_DIR: u8 = 0x55;
/// `XOR #imm`.
pub const XOR_IMM: u8 = 0x56;
/// `XOR $addr`.
pub const XOR_DIR: u8 = 0x57;
/// `LSL #imm`.
pub const LSL_IMM: u8 = 0x58;
/// `LSL $addr`.
pub const LSL_DIR: u8 = 0x59;
/// `LSR #imm`.
pub const LSR_IMM: u8 = 0x5A;
/// `LSR $addr`.
pub const LSR_DIR: u8 = 0x5B;
/// `ROL #imm`.
pub const ROL_IMM: u8 = 0x5C;
/// `ROL $addr`.
pub const ROL_DIR: u8 = 0x5D;
/// `ROR #imm`.
pub const ROR_IMM: u8 = 0x5E;
/// `ROR $addr`.
pub const ROR_DIR: u8 = 0x5F;

/// `ZERO $addr`.
pub const ZERO_DIR: u8 = 0x60;
/// `ZERO ($addr)`.
pub const ZERO_IND: u8 = 0x61;
/// `INC $addr`.
pub const INC_DIR: u8 = 0x62;
/// `INC ($addr)`.
pub const INC_IND: u8 = 0x63;
/// `DEC $addr`.
pub const DEC_DIR: u8 = 0x64;
/// `DEC ($addr)`.
pub const DEC_IND: u8 = 0x65;

/// `NOOP`.
pub const NOOP: u8 = 0xF2;

/// Every valid high byte, in table order.
pub const ALL: [u8; 38] = [
    HALT, LOAD_IMM, LOAD_DIR, STOR_DIR, STOR_IND, LOAD_IND, ADD_IMM, ADD_DIR, SUB_IMM, SUB_DIR,
    CMP_IMM, CMP_DIR, BREQ, BRNE, JUMP, AND_IMM, AND_DIR, BIT_IMM, BIT_DIR, OR_IMM, OR_DIR,
    XOR_IMM, XOR_DIR, LSL_IMM, LSL_DIR, LSR_IMM, LSR_DIR, ROL_IMM, ROL_DIR, ROR_IMM, ROR_DIR,
    ZERO_DIR, ZERO_IND, INC_DIR, INC_IND, DEC_DIR, DEC_IND, NOOP,
];
