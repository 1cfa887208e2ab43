//! Tests for the byte-lane accumulator.

use cpw_lanes::LaneAccumulator;

#[test]
fn zero_value() {
    let acc = LaneAccumulator::new();
    assert!(acc.is_zero());
    assert_eq!(acc.lanes(), &[] as &[u8]);
    assert_eq!(acc.to_hex(), "0x0");
}

#[test]
fn or_zero_is_noop() {
    let mut acc = LaneAccumulator::new();
    acc.or_word(0);
    assert!(acc.is_zero());
    assert_eq!(acc.to_hex(), "0x0");
}

#[test]
fn single_byte_word() {
    let mut acc = LaneAccumulator::new();
    acc.or_word(0x2a);
    assert_eq!(acc.lanes(), &[0x2a]);
    assert_eq!(acc.to_hex(), "0x2a");
}

#[test]
fn shift_positions_a_new_low_lane() {
    let mut acc = LaneAccumulator::new();
    acc.or_word(0x03);
    acc.shift_lane();
    assert_eq!(acc.lanes(), &[0x03, 0x00]);
    acc.or_word(0x01);
    assert_eq!(acc.lanes(), &[0x03, 0x01]);
    assert_eq!(acc.to_hex(), "0x301");
}

#[test]
fn shifting_zero_stays_zero() {
    let mut acc = LaneAccumulator::new();
    acc.shift_lane();
    acc.shift_lane();
    assert!(acc.is_zero());
    assert_eq!(acc.to_hex(), "0x0");
}

#[test]
fn wide_word_widens_at_the_top() {
    let mut acc = LaneAccumulator::new();
    acc.or_word(0x012c);
    assert_eq!(acc.lanes(), &[0x01, 0x2c]);
    acc.shift_lane();
    assert_eq!(acc.to_hex(), "0x12c00");
}

#[test]
fn oversized_word_bleeds_into_upper_lanes() {
    // 400 does not fit one lane; the OR spills its high bits upward instead
    // of failing.
    let mut acc = LaneAccumulator::new();
    acc.or_word(400);
    acc.shift_lane();
    acc.or_word(200);
    acc.shift_lane();
    acc.or_word(1);
    assert_eq!(acc.to_hex(), "0x190c801");
}

#[test]
fn or_word_merges_with_existing_lanes() {
    let mut acc = LaneAccumulator::new();
    acc.or_word(0xf0);
    acc.or_word(0x0f);
    assert_eq!(acc.lanes(), &[0xff]);
    acc.or_word(0x100);
    assert_eq!(acc.lanes(), &[0x01, 0xff]);
}

#[test]
fn or_low_byte_targets_the_last_lane() {
    let mut acc = LaneAccumulator::new();
    acc.or_word(0x05);
    acc.shift_lane();
    acc.or_low_byte(0xff);
    assert_eq!(acc.lanes(), &[0x05, 0xff]);

    let mut zero = LaneAccumulator::new();
    zero.or_low_byte(0xff);
    assert_eq!(zero.to_hex(), "0xff");
}

#[test]
fn hex_has_no_leading_padding() {
    let mut acc = LaneAccumulator::new();
    acc.or_word(0x0a);
    acc.shift_lane();
    acc.or_word(0x05);
    assert_eq!(acc.to_hex(), "0xa05");
}

#[test]
fn interior_zero_lanes_are_preserved() {
    let mut acc = LaneAccumulator::new();
    acc.or_word(0x01);
    acc.shift_lane();
    acc.shift_lane();
    acc.or_word(0x02);
    assert_eq!(acc.lanes(), &[0x01, 0x00, 0x02]);
    assert_eq!(acc.to_hex(), "0x10002");
}
