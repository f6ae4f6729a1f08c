use std::collections::BTreeMap;

use mempack::error::{Error, ErrorKind};
use mempack::packer::MemPacker;
use mempack::serialize::Serializer;

use super::WellTarget;
use crate::utility::{from_bytes, to_bytes};

//--------------------------------------------------------------------------
// Byte layout (big endian packer)
//--------------------------------------------------------------------------
#[test]
fn count_and_names_layout() -> Result<(), Error> {
    // (count, names): the u32 count, then the sequence length, then each
    // name as length-prefixed bytes.
    let value = (2u32, vec!["A".to_string(), "BB".to_string()]);
    #[rustfmt::skip]
    let expected: Vec<u8> = vec![
        0, 0, 0, 2,             // count
        0, 0, 0, 0, 0, 0, 0, 2, // sequence length
        0, 0, 0, 0, 0, 0, 0, 1, b'A',
        0, 0, 0, 0, 0, 0, 0, 2, b'B', b'B',
    ];
    assert_eq!(to_bytes(&value), Ok(expected.clone()));
    assert_eq!(from_bytes::<(u32, Vec<String>)>(&expected), Ok(value));
    Ok(())
}

#[test]
fn empty_containers_are_a_bare_count() {
    assert_eq!(to_bytes(&Vec::<f64>::new()), Ok(vec![0; 8]));
    assert_eq!(to_bytes(&BTreeMap::<String, f64>::new()), Ok(vec![0; 8]));
}

#[test]
fn optional_layout() {
    assert_eq!(to_bytes(&Some(0x7F_u8)), Ok(vec![1, 0x7F]));
    assert_eq!(to_bytes(&Option::<u8>::None), Ok(vec![0]));
}

#[test]
fn map_entries_follow_iteration_order() {
    let map = BTreeMap::from([(0x02u8, 0x0B0B_u16), (0x01, 0x0A0A)]);
    #[rustfmt::skip]
    let expected: Vec<u8> = vec![
        0, 0, 0, 0, 0, 0, 0, 2,
        0x01, 0x0A, 0x0A, // B-tree order is sorted by key
        0x02, 0x0B, 0x0B,
    ];
    assert_eq!(to_bytes(&map), Ok(expected));
}

#[test]
fn scalar_run_layout_matches_per_element() {
    // [u16; 2] packs as a contiguous run, the tuple of two u16 packs
    // element by element; the bytes must agree.
    assert_eq!(to_bytes(&[0x1122u16, 0x3344]), to_bytes(&(0x1122u16, 0x3344u16)));
}

//--------------------------------------------------------------------------
// Corrupt and mismatched streams
//--------------------------------------------------------------------------
#[test]
fn out_of_range_alternative_is_fatal() {
    let bytes = [0, 0, 0, 0, 0, 0, 0, 99];
    assert_eq!(from_bytes::<WellTarget>(&bytes), Err(ErrorKind::InvalidVariant.into()));
}

#[test]
fn duplicate_keys_collapse_to_the_last_entry() -> Result<(), Error> {
    // A handcrafted stream carrying the same key twice; native insert
    // semantics keep the later value rather than raising an error.
    #[rustfmt::skip]
    let bytes = [
        0, 0, 0, 0, 0, 0, 0, 2,
        0x07, 0x00, 0x01,
        0x07, 0x00, 0x02,
    ];
    let map = from_bytes::<BTreeMap<u8, u16>>(&bytes)?;
    assert_eq!(map, BTreeMap::from([(0x07u8, 0x0002u16)]));
    Ok(())
}

#[test]
fn invalid_bool_byte_is_fatal() {
    assert_eq!(from_bytes::<bool>(&[2]), Err(ErrorKind::InvalidBool.into()));
}

#[test]
fn truncated_buffer_is_fatal() {
    let bytes = [0, 0, 0, 0, 0, 0, 0, 3, 0x41];
    assert_eq!(from_bytes::<Vec<u8>>(&bytes), Err(ErrorKind::UnexpectedEof.into()));
}

//--------------------------------------------------------------------------
// Partial consumption of a larger buffer
//--------------------------------------------------------------------------
#[test]
fn position_reports_consumed_bytes() -> Result<(), Error> {
    let packer = MemPacker::new().big_endian();
    let mut serializer = Serializer::new(&packer);

    // A buffer with trailing bytes that belong to someone else.
    serializer.set_buffer(vec![0xAA, 0xBB, 0xDE, 0xAD, 0xDE, 0xAD]);
    let mut value = 0u16;
    serializer.unpack(&mut value)?;
    assert_eq!(value, 0xAABB);
    assert_eq!(serializer.position(), 2);
    Ok(())
}
