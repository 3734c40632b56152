// SPDX-FileCopyrightText: The knobio authors
// SPDX-License-Identifier: MPL-2.0

use strum::IntoEnumIterator as _;

use super::*;

#[test]
fn control_byte_clamps_out_of_range_raw_bytes() {
    assert_eq!(ControlByte::MIN, ControlByte::new(0));
    assert_eq!(ControlByte::MAX, ControlByte::new(127));
    assert_eq!(ControlByte::MAX, ControlByte::new(128));
    assert_eq!(ControlByte::MAX, ControlByte::new(255));
    assert_eq!(ControlByte::MAX, ControlByte::from(200));
}

#[test]
fn twos_complement_decode() {
    let encoding = Encoding::TwosComplement;
    assert_eq!(0, encoding.decode(ControlByte::new(0)));
    assert_eq!(1, encoding.decode(ControlByte::new(1)));
    assert_eq!(63, encoding.decode(ControlByte::new(63)));
    assert_eq!(-64, encoding.decode(ControlByte::new(64)));
    assert_eq!(-1, encoding.decode(ControlByte::new(127)));
}

#[test]
fn offset_binary_decode() {
    let encoding = Encoding::OffsetBinary;
    assert_eq!(-64, encoding.decode(ControlByte::new(0)));
    assert_eq!(-1, encoding.decode(ControlByte::new(63)));
    assert_eq!(0, encoding.decode(ControlByte::new(64)));
    assert_eq!(1, encoding.decode(ControlByte::new(65)));
    assert_eq!(63, encoding.decode(ControlByte::new(127)));
}

#[test]
fn signed_bit_decode() {
    let encoding = Encoding::SignedBit;
    assert_eq!(0, encoding.decode(ControlByte::new(0)));
    assert_eq!(-1, encoding.decode(ControlByte::new(1)));
    assert_eq!(-63, encoding.decode(ControlByte::new(63)));
    assert_eq!(0, encoding.decode(ControlByte::new(64)));
    assert_eq!(1, encoding.decode(ControlByte::new(65)));
    assert_eq!(63, encoding.decode(ControlByte::new(127)));
}

#[test]
fn signed_bit2_decode_reverses_direction() {
    let encoding = Encoding::SignedBit2;
    assert_eq!(0, encoding.decode(ControlByte::new(64)));
    assert_eq!(-6, encoding.decode(ControlByte::new(70)));
    assert_eq!(10, encoding.decode(ControlByte::new(10)));
    assert_eq!(-63, encoding.decode(ControlByte::new(127)));
    assert_eq!(63, encoding.decode(ControlByte::new(63)));
}

#[test]
fn signed_bit2_encode() {
    let encoding = Encoding::SignedBit2;
    assert_eq!(ControlByte::new(70), encoding.encode(-6));
    assert_eq!(ControlByte::new(10), encoding.encode(10));
    assert_eq!(ControlByte::new(64), encoding.encode(0));
}

#[test]
fn relative2_decode() {
    let encoding = Encoding::Relative2;
    assert_eq!(0, encoding.decode(ControlByte::new(0)));
    assert_eq!(0x40, encoding.decode(ControlByte::new(0x40)));
    assert_eq!(-1, encoding.decode(ControlByte::new(0x41)));
    assert_eq!(-63, encoding.decode(ControlByte::new(0x7f)));
}

#[test]
fn relative4_decode() {
    let encoding = Encoding::Relative4;
    assert_eq!(0, encoding.decode(ControlByte::new(0)));
    assert_eq!(-3, encoding.decode(ControlByte::new(3)));
    assert_eq!(-64, encoding.decode(ControlByte::new(0x40)));
    assert_eq!(1, encoding.decode(ControlByte::new(0x41)));
    assert_eq!(63, encoding.decode(ControlByte::new(0x7f)));
}

#[test]
fn absolute_fallback_breaks_at_61_not_64() {
    assert_eq!(61, Encoding::Absolute.decode(ControlByte::new(61)));
    assert_eq!(-66, Encoding::Absolute.decode(ControlByte::new(62)));
    assert_eq!(-65, Encoding::Absolute.decode(ControlByte::new(63)));
    assert_eq!(-1, Encoding::Absolute.decode(ControlByte::new(127)));
    // The two's complement scheme still decodes these samples as positive.
    assert_eq!(62, Encoding::TwosComplement.decode(ControlByte::new(62)));
    assert_eq!(63, Encoding::TwosComplement.decode(ControlByte::new(63)));
}

#[test]
fn round_trip_over_representable_deltas() {
    let representable = |encoding: Encoding| -> Vec<i32> {
        match encoding {
            Encoding::Absolute => (-66..=61).collect(),
            Encoding::TwosComplement | Encoding::OffsetBinary => (-64..=63).collect(),
            Encoding::SignedBit | Encoding::SignedBit2 => (-63..=63).collect(),
            Encoding::Relative2 => (0..=64).collect(),
            Encoding::Relative4 => (-64..=63).filter(|delta| *delta != 0).collect(),
        }
    };
    for encoding in Encoding::iter() {
        for delta in representable(encoding) {
            assert_eq!(
                delta,
                encoding.decode(encoding.encode(delta)),
                "{encoding}: delta {delta} does not round-trip"
            );
        }
    }
}

#[test]
fn round_trip_examples() {
    assert_eq!(
        5,
        Encoding::TwosComplement.decode(Encoding::TwosComplement.encode(5))
    );
    assert_eq!(
        -30,
        Encoding::TwosComplement.decode(Encoding::TwosComplement.encode(-30))
    );
}

#[test]
fn encode_clamps_unrepresentable_deltas_into_the_wire_domain() {
    for encoding in Encoding::iter() {
        for delta in [i32::MIN, -1000, -128, 127, 1000, i32::MAX] {
            let control = encoding.encode(delta);
            assert!(control <= ControlByte::MAX);
        }
    }
}
