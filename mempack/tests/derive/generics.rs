use mempack::{Deserialize, Serialize};

use crate::utility::{from_bytes, to_bytes};

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
struct Tagged<T> {
    tag: String,
    payload: T,
}

#[test]
fn generic_struct_roundtrips() {
    let value = Tagged { tag: "PORO".to_string(), payload: vec![0.25f64, 0.31] };
    let bytes = to_bytes(&value).expect("the tagged value must pack");
    assert_eq!(from_bytes::<Tagged<Vec<f64>>>(&bytes), Ok(value));
}

#[test]
fn generic_struct_with_owned_payload() {
    let value = Tagged { tag: "PVT".to_string(), payload: Some(Box::new(0xBEEF_u32)) };
    let bytes = to_bytes(&value).expect("the tagged value must pack");
    assert_eq!(from_bytes::<Tagged<Option<Box<u32>>>>(&bytes), Ok(value));
}

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
enum Slot<T> {
    #[default]
    Vacant,
    Occupied(T),
}

#[test]
fn generic_enum_roundtrips() {
    let bytes = to_bytes(&Slot::Occupied(0x0A0B_u16)).expect("the slot must pack");
    assert_eq!(from_bytes::<Slot<u16>>(&bytes), Ok(Slot::Occupied(0x0A0B)));

    let bytes = to_bytes(&Slot::<u16>::Vacant).expect("the slot must pack");
    assert_eq!(from_bytes::<Slot<u16>>(&bytes), Ok(Slot::Vacant));
}

#[test]
fn generics_compose() {
    let value = Tagged { tag: "WELLS".to_string(), payload: vec![Slot::Occupied("P-1".to_string()), Slot::Vacant] };
    let bytes = to_bytes(&value).expect("the composed value must pack");
    assert_eq!(from_bytes::<Tagged<Vec<Slot<String>>>>(&bytes), Ok(value));
}
