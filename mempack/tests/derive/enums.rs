use mempack::error::ErrorKind;
use mempack::{Deserialize, Serialize};

use crate::utility::{from_bytes, to_bytes};

#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Clone)]
enum Control {
    #[default]
    Shut,
    Rate(f64),
    Pressure {
        target: f64,
        limit: f64,
    },
}

const SHUT_BYTES: [u8; 8] = [0, 0, 0, 0, 0, 0, 0, 0];
#[rustfmt::skip]
const RATE_BYTES: [u8; 16] = [
    0, 0, 0, 0, 0, 0, 0, 1,
    0x3F, 0xF8, 0, 0, 0, 0, 0, 0, // 1.5
];
#[rustfmt::skip]
const PRESSURE_BYTES: [u8; 24] = [
    0, 0, 0, 0, 0, 0, 0, 2,
    0x40, 0x00, 0, 0, 0, 0, 0, 0, // 2.0
    0x3F, 0xF0, 0, 0, 0, 0, 0, 0, // 1.0
];

//--------------------------------------------------------------------------
// Layout
//--------------------------------------------------------------------------
#[test]
fn serialize_unit_variant() {
    assert_eq!(to_bytes(&Control::Shut), Ok(SHUT_BYTES.into()));
}

#[test]
fn serialize_tuple_variant() {
    assert_eq!(to_bytes(&Control::Rate(1.5)), Ok(RATE_BYTES.into()));
}

#[test]
fn serialize_struct_variant() {
    assert_eq!(to_bytes(&Control::Pressure { target: 2.0, limit: 1.0 }), Ok(PRESSURE_BYTES.into()));
}

//--------------------------------------------------------------------------
// Reconstruction
//--------------------------------------------------------------------------
#[test]
fn deserialize_every_alternative() {
    assert_eq!(from_bytes::<Control>(&SHUT_BYTES), Ok(Control::Shut));
    assert_eq!(from_bytes::<Control>(&RATE_BYTES), Ok(Control::Rate(1.5)));
    assert_eq!(from_bytes::<Control>(&PRESSURE_BYTES), Ok(Control::Pressure { target: 2.0, limit: 1.0 }));
}

#[test]
fn alternative_index_is_honored_over_the_default() {
    // Index 2 must come back as the third alternative, never silently as
    // the default one.
    let restored = from_bytes::<Control>(&PRESSURE_BYTES).expect("the stream must decode");
    assert!(matches!(restored, Control::Pressure { .. }));
}

#[test]
fn out_of_range_index_is_a_decode_error() {
    let bytes = [0, 0, 0, 0, 0, 0, 0, 99];
    assert_eq!(from_bytes::<Control>(&bytes), Err(ErrorKind::InvalidVariant.into()));
}

#[test]
fn index_is_read_before_any_payload() {
    // Only the index fits in the buffer; an out-of-range value must fail
    // without attempting to read payload bytes.
    let bytes = [0, 0, 0, 0, 0, 0, 0, 3];
    assert_eq!(from_bytes::<Control>(&bytes), Err(ErrorKind::InvalidVariant.into()));
}

//--------------------------------------------------------------------------
// Enums as members
//--------------------------------------------------------------------------
#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
struct Slot {
    controls: Vec<Control>,
    fallback: Option<Control>,
}

#[test]
fn enums_nest_inside_other_shapes() {
    let slot = Slot {
        controls: vec![Control::Rate(4000.0), Control::Shut],
        fallback: Some(Control::Pressure { target: 180.0, limit: 90.0 }),
    };
    let bytes = to_bytes(&slot).expect("the slot must pack");
    assert_eq!(from_bytes::<Slot>(&bytes), Ok(slot));
}
