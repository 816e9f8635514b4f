//! Built-in Program Images.
//!
//! The Fibonacci driver fills `$80..=$8F` with the first sixteen terms of the
//! sequence starting `1, 2, 3, 5`. Its cells:
//!
//! | Cell  | Role |
//! |-------|------|
//! | `$90` | lagging term |
//! | `$91` | leading term |
//! | `$9F` | output pointer, `$80` up to the sentinel `$90` |
//!
//! The loop stores each new sum through the pointer cell, reads it back the same
//! way to rotate the pair, and stops when the incremented pointer equals the
//! sentinel address.
//!
//! ```text
//! 00  1080  LOAD #$80
//! 01  129F  STOR $9F       ; pointer = $80
//! 02  1001  LOAD #$01
//! 03  1290  STOR $90       ; lag = 1
//! 04  1291  STOR $91       ; lead = 1
//! 05  139F  STOR ($9F)     ; out[$80] = 1
//! 06  119F  LOAD $9F       ; loop:
//! 07  2001  ADD #$01
//! 08  129F  STOR $9F       ; pointer += 1
//! 09  2690  CMP #$90
//! 0A  3013  BREQ $13       ; pointer == sentinel -> done
//! 0B  1190  LOAD $90
//! 0C  2191  ADD $91        ; sum = lag + lead
//! 0D  139F  STOR ($9F)     ; out[pointer] = sum
//! 0E  1191  LOAD $91
//! 0F  1290  STOR $90       ; lag = lead
//! 10  149F  LOAD ($9F)
//! 11  1291  STOR $91       ; lead = sum
//! 12  4006  JUMP $06
//! 13  0000  HALT           ; done:
//! ```

/// First output cell of the Fibonacci program.
pub const FIB_OUTPUT_BASE: u16 = 0x80;

/// Number of terms the Fibonacci program writes.
pub const FIB_OUTPUT_LEN: usize = 16;

/// Cell holding the lagging term.
pub const FIB_LAG_CELL: u16 = 0x90;

/// Cell holding the leading term.
pub const FIB_LEAD_CELL: u16 = 0x91;

/// Cell holding the output pointer.
pub const FIB_POINTER_CELL: u16 = 0x9F;

/// Address of the Fibonacci program's `HALT`.
pub const FIB_HALT_ADDR: u16 = 0x13;

/// The Fibonacci program, to be loaded at `$00`.
pub const FIBONACCI: [u16; 20] = [
    0x1080, 0x129F, 0x1001, 0x1290, 0x1291, 0x139F, 0x119F, 0x2001, 0x129F, 0x2690, //
    0x3013, 0x1190, 0x2191, 0x139F, 0x1191, 0x1290, 0x149F, 0x1291, 0x4006, 0x0000,
];

/// The values the Fibonacci program leaves in `$80..=$8F`.
pub const FIB_EXPECTED: [u16; FIB_OUTPUT_LEN] = [
    1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987, 1597,
];
