//! Global System Constants.
//!
//! Memory geometry and the bit layout of an instruction word:
//!
//! ```text
//!  15    12 11     8 7              0
//! +--------+--------+----------------+
//! | opcode |  mode  |    operand     |
//! +--------+--------+----------------+
//! ```

/// Number of 16-bit words of machine memory.
pub const MEMORY_WORDS: usize = 256;

/// Bit position of the opcode nibble.
pub const OPCODE_SHIFT: u16 = 12;

/// Bit position of the addressing-mode nibble.
pub const MODE_SHIFT: u16 = 8;

/// Mask for a 4-bit field after shifting.
pub const NIBBLE_MASK: u16 = 0xF;

/// Mask for the 8-bit operand field.
pub const OPERAND_MASK: u16 = 0xFF;

/// Default step budget for `run` when none is configured.
pub const DEFAULT_MAX_STEPS: u64 = 10_000;
