use super::{Packer, Scalar};
use crate::byte_order::ByteOrder;
use crate::error::{Error, ErrorKind};

/// A [`Packer`] that lays scalars out at their natural width in a
/// configurable byte order.
///
/// Strings are packed as a `u64` byte length followed by the UTF-8 bytes.
/// A buffer packed with one byte order must be unpacked with the same one;
/// nothing in the buffer records which was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemPacker {
    byte_order: ByteOrder,
}

impl MemPacker {
    /// Create a packer using the machine's native byte order.
    ///
    /// Use the [`Self::big_endian`] and [`Self::little_endian`] functions to
    /// pick a specific byte order instead:
    /// ```
    /// # use mempack::packer::MemPacker;
    /// let packer = MemPacker::new().little_endian();
    /// ```
    pub fn new() -> Self {
        Self { byte_order: ByteOrder::native() }
    }

    /// Create a packer that uses the **big endian** byte order.
    pub fn big_endian(self) -> Self {
        Self { byte_order: ByteOrder::BigEndian }
    }

    /// Create a packer that uses the **little endian** byte order.
    pub fn little_endian(self) -> Self {
        Self { byte_order: ByteOrder::LittleEndian }
    }

    fn slot<'a>(&self, buffer: &'a [u8], position: &mut usize, len: usize) -> Result<&'a [u8], Error> {
        let end = position.checked_add(len).ok_or(ErrorKind::UnexpectedEof)?;
        let bytes = buffer.get(*position..end).ok_or(ErrorKind::UnexpectedEof)?;
        *position = end;
        Ok(bytes)
    }

    fn slot_mut<'a>(&self, buffer: &'a mut [u8], position: &mut usize, len: usize) -> Result<&'a mut [u8], Error> {
        let end = position.checked_add(len).ok_or(ErrorKind::UnexpectedEof)?;
        let bytes = buffer.get_mut(*position..end).ok_or(ErrorKind::UnexpectedEof)?;
        *position = end;
        Ok(bytes)
    }
}

impl Default for MemPacker {
    fn default() -> Self {
        Self::new()
    }
}

impl Packer for MemPacker {
    fn size<T: Scalar>(&self) -> usize {
        T::WIDTH
    }

    fn size_slice<T: Scalar>(&self, len: usize) -> usize {
        len * T::WIDTH
    }

    fn size_str(&self, value: &str) -> usize {
        u64::WIDTH + value.len()
    }

    fn pack<T: Scalar>(&self, value: T, buffer: &mut [u8], position: &mut usize) -> Result<(), Error> {
        value.put(self.byte_order, self.slot_mut(buffer, position, T::WIDTH)?);
        Ok(())
    }

    fn pack_slice<T: Scalar>(&self, values: &[T], buffer: &mut [u8], position: &mut usize) -> Result<(), Error> {
        let bytes = self.slot_mut(buffer, position, values.len() * T::WIDTH)?;
        for (value, chunk) in values.iter().zip(bytes.chunks_exact_mut(T::WIDTH)) {
            value.put(self.byte_order, chunk);
        }
        Ok(())
    }

    fn pack_str(&self, value: &str, buffer: &mut [u8], position: &mut usize) -> Result<(), Error> {
        self.pack(value.len() as u64, buffer, position)?;
        self.slot_mut(buffer, position, value.len())?.copy_from_slice(value.as_bytes());
        Ok(())
    }

    fn unpack<T: Scalar>(&self, buffer: &[u8], position: &mut usize) -> Result<T, Error> {
        Ok(T::get(self.byte_order, self.slot(buffer, position, T::WIDTH)?))
    }

    fn unpack_slice<T: Scalar>(&self, values: &mut [T], buffer: &[u8], position: &mut usize) -> Result<(), Error> {
        let bytes = self.slot(buffer, position, values.len() * T::WIDTH)?;
        for (value, chunk) in values.iter_mut().zip(bytes.chunks_exact(T::WIDTH)) {
            *value = T::get(self.byte_order, chunk);
        }
        Ok(())
    }

    fn unpack_string(&self, buffer: &[u8], position: &mut usize) -> Result<String, Error> {
        let len = self.unpack::<u64>(buffer, position)?;
        let len = usize::try_from(len).map_err(|_| ErrorKind::LengthOverflow)?;
        let bytes = self.slot(buffer, position, len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| ErrorKind::InvalidUtf8.into())
    }
}
