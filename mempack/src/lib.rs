#![warn(missing_docs)]

//! # Mempack
//!
//! Mempack converts in-memory object graphs — nested structs, enums,
//! containers, optionals, and heap-owned substructures — to and from a flat
//! byte buffer, with no schema files and no metadata in the stream. The
//! structure of the bytes is inferred entirely from the static shape of the
//! value, plus one leading quantity wherever a shape has a run-time degree of
//! freedom: the element count of a container, the alternative index of an
//! enum, the presence flag of an optional.
//!
//! ## Serializing data structures
//!
//! Like other serialization frameworks, mempack comes with the derive macros
//! [`Serialize`] and [`Deserialize`] to implement the [`serialize::Serialize`]
//! and [`serialize::Deserialize`] traits, but you can also implement these
//! traits by hand — for example to leave caches and derived members out of
//! the wire format. Once implemented, a [`serialize::Serializer`] bound to a
//! [`packer::Packer`] does the rest:
//!
//! ```
//! use mempack::{Deserialize, Serialize};
//! use mempack::packer::MemPacker;
//! use mempack::serialize::Serializer;
//!
//! #[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
//! struct CellState {
//!     pressure: f64,
//!     saturation: Vec<f64>,
//! }
//!
//! let state = CellState { pressure: 211.3, saturation: vec![0.2, 0.8] };
//!
//! let packer = MemPacker::new();
//! let mut serializer = Serializer::new(&packer);
//! serializer.pack(&state)?;
//!
//! let mut restored = CellState::default();
//! serializer.unpack(&mut restored)?;
//! assert_eq!(restored, state);
//! # Ok::<(), mempack::error::Error>(())
//! ```
//!
//! [`serialize::Serializer::pack`] runs two traversals over the value: a size
//! pass that measures the exact byte length of the serialized form, then a
//! write pass that fills the buffer it just allocated. The two passes share
//! every shape rule, so the measured size always matches the written size.
//! [`serialize::Serializer::unpack`] runs a single read pass that rebuilds
//! the destination in place, resizing containers and re-allocating owned
//! substructures as it goes.
//!
//! ## The wire format
//!
//! The buffer is *not* self-describing: a reader must know the exact static
//! type that was packed, and must use a packer with the same configuration.
//! There is no type tag, no versioning, and no endianness negotiation.
//! Decoding with a mismatched type yields garbage or an error, by design —
//! the format is meant for state snapshots exchanged between trusted
//! components built against the same types.
//!
//! Shapes are encoded as follows:
//!
//! - scalars, strings: handed to the [`packer::Packer`], which owns the
//!   byte-exact representation;
//! - tuples, arrays: elements in order, no prefix (the arity is static);
//! - sequences, maps, sets: a `u64` count, then the elements or entries;
//! - optionals: a `bool` flag, then the payload if present;
//! - `Box`: the pointee (use `Option<Box<T>>` for a nullable owner);
//! - enums: a `u64` alternative index, then the active alternative's fields.
//!
//! ## Exchanging buffers with the outside
//!
//! The serializer owns its buffer. After a `pack`, read it with
//! [`serialize::Serializer::buffer`] or move it out with
//! [`serialize::Serializer::take`]; before an `unpack`, place bytes with
//! [`serialize::Serializer::set_buffer`]. [`serialize::Serializer::position`]
//! reports how many bytes a pass consumed, which lets a caller carve one
//! value off the front of a larger buffer.
//!
//! ## Implementing custom packers
//!
//! The [`packer::Packer`] trait is the only byte-level collaborator: it
//! sizes, writes, and reads fixed-width scalars, contiguous scalar runs, and
//! strings at a buffer offset. [`packer::MemPacker`] packs scalars at their
//! natural width in a configurable byte order; implement the trait yourself
//! if you need a different leaf representation. All shape logic stays in the
//! serializer either way.

pub mod byte_order;
pub mod error;
pub mod packer;
pub mod serialize;

pub use mempack_derive::{Deserialize, Serialize};

mod types;

extern crate self as mempack;
