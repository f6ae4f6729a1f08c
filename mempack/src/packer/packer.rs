use super::Scalar;
use crate::error::Error;

/// The byte-level collaborator of a [`Serializer`](crate::serialize::Serializer).
///
/// A packer knows how to size, write, and read fixed-width scalars,
/// contiguous scalar runs, and strings at a given offset of a byte buffer.
/// It owns the byte-exact representation; the serializer owns all shape
/// logic and calls into the packer for every leaf.
///
/// `pack_*` functions write at `position` and advance it by the number of
/// bytes written; `unpack_*` functions read and advance it likewise. A
/// buffer too short for the access fails with
/// [`ErrorKind::UnexpectedEof`](crate::error::ErrorKind::UnexpectedEof).
pub trait Packer {
    /// The number of bytes one `T` occupies.
    fn size<T: Scalar>(&self) -> usize;

    /// The number of bytes a contiguous run of `len` values of `T` occupies.
    fn size_slice<T: Scalar>(&self, len: usize) -> usize;

    /// The number of bytes `value` occupies, including its length prefix.
    fn size_str(&self, value: &str) -> usize;

    /// Write one scalar at `position`.
    fn pack<T: Scalar>(&self, value: T, buffer: &mut [u8], position: &mut usize) -> Result<(), Error>;

    /// Write a contiguous run of scalars at `position`.
    ///
    /// The resulting bytes must coincide with packing each element
    /// separately; that equivalence is what lets the sequence handlers
    /// switch freely between the per-element and whole-run paths.
    fn pack_slice<T: Scalar>(&self, values: &[T], buffer: &mut [u8], position: &mut usize) -> Result<(), Error>;

    /// Write a length-prefixed string at `position`.
    fn pack_str(&self, value: &str, buffer: &mut [u8], position: &mut usize) -> Result<(), Error>;

    /// Read one scalar at `position`.
    fn unpack<T: Scalar>(&self, buffer: &[u8], position: &mut usize) -> Result<T, Error>;

    /// Read a contiguous run of scalars at `position` into `values`.
    fn unpack_slice<T: Scalar>(&self, values: &mut [T], buffer: &[u8], position: &mut usize) -> Result<(), Error>;

    /// Read a length-prefixed string at `position`.
    fn unpack_string(&self, buffer: &[u8], position: &mut usize) -> Result<String, Error>;
}
