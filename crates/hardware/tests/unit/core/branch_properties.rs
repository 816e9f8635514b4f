//! # Compare and Branch Properties
//!
//! Property tests over arbitrary accumulator and memory values: `CMP` sets the
//! flag exactly on equality, the conditional branches follow it, and arithmetic
//! wraps modulo 2^16.

use accsim_core::core::Status;
use accsim_core::isa::Instruction;
use proptest::prelude::*;

use crate::common::builder::*;
use crate::common::harness::TestContext;

const DATA: u8 = 0x40;
const TARGET: u8 = 0x20;

fn operands() -> impl Strategy<Value = (u16, u16)> {
    prop_oneof![
        any::<u16>().prop_map(|a| (a, a)),
        (any::<u16>(), any::<u16>()),
    ]
}

proptest! {
    #[test]
    fn prop_breq_follows_equality((a, b) in operands()) {
        let mut ctx = TestContext::new()
            .load_program(0, &[cmp(DATA), Instruction::Breq(TARGET)])
            .with_word(u16::from(DATA), b)
            .with_acc(a);

        prop_assert_eq!(ctx.run(2), Status::Continue);
        prop_assert_eq!(ctx.machine.flag(), a == b);
        let expected = if a == b { u16::from(TARGET) } else { 2 };
        prop_assert_eq!(ctx.pc(), expected);
        prop_assert_eq!(ctx.acc(), a);
    }

    #[test]
    fn prop_brne_is_complement((a, b) in operands()) {
        let mut ctx = TestContext::new()
            .load_program(0, &[cmp(DATA), Instruction::Brne(TARGET)])
            .with_word(u16::from(DATA), b)
            .with_acc(a);

        let _ = ctx.run(2);
        let expected = if a == b { 2 } else { u16::from(TARGET) };
        prop_assert_eq!(ctx.pc(), expected);
        prop_assert_eq!(ctx.machine.stats().branches_taken, u64::from(a != b));
    }

    #[test]
    fn prop_cmp_immediate_zero_extends(a in any::<u16>(), v in any::<u8>()) {
        let mut ctx = TestContext::new()
            .load_program(0, &[cmp_imm(v)])
            .with_acc(a);

        let _ = ctx.step();
        prop_assert_eq!(ctx.machine.flag(), a == u16::from(v));
    }

    #[test]
    fn prop_add_wraps(a in any::<u16>(), b in any::<u16>()) {
        let mut ctx = TestContext::new()
            .load_program(0, &[add(DATA), Instruction::Halt])
            .with_word(u16::from(DATA), b)
            .with_acc(a);

        prop_assert_eq!(ctx.run(10), Status::Halted);
        prop_assert_eq!(ctx.acc(), a.wrapping_add(b));
    }

    #[test]
    fn prop_sub_wraps(a in any::<u16>(), v in any::<u8>()) {
        let mut ctx = TestContext::new()
            .load_program(0, &[sub_imm(v), Instruction::Halt])
            .with_acc(a);

        prop_assert_eq!(ctx.run(10), Status::Halted);
        prop_assert_eq!(ctx.acc(), a.wrapping_sub(u16::from(v)));
    }
}

#[test]
fn test_flag_survives_arithmetic() {
    let mut ctx = TestContext::new().load_program(
        0,
        &[
            load_imm(3),
            cmp_imm(3),
            add_imm(1),
            sub_imm(7),
            stor(0x80),
            Instruction::Breq(0x10),
        ],
    );
    let _ = ctx.run(6);
    assert!(ctx.machine.flag());
    assert_eq!(ctx.pc(), 0x10);
    assert_eq!(ctx.word(0x80), 0xFFFD);
}
