use crate::error::{Error, ErrorKind};
use crate::packer::Packer;
use crate::serialize::{Deserialize, Serialize, Serializer};

macro_rules! impl_scalar_serialize {
    ($type:ty) => {
        impl Serialize for $type {
            fn serialize<P: Packer>(&self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
                serializer.scalar(*self)
            }

            fn serialize_slice<P: Packer>(values: &[Self], serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
                serializer.scalar_slice(values)
            }
        }

        impl Deserialize for $type {
            fn deserialize<P: Packer>(&mut self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
                serializer.scalar_mut(self)
            }

            fn deserialize_slice<P: Packer>(
                values: &mut [Self],
                serializer: &mut Serializer<'_, P>,
            ) -> Result<(), Error> {
                serializer.scalar_slice_mut(values)
            }
        }
    };
}

impl_scalar_serialize!(u8);
impl_scalar_serialize!(u16);
impl_scalar_serialize!(u32);
impl_scalar_serialize!(u64);
impl_scalar_serialize!(i8);
impl_scalar_serialize!(i16);
impl_scalar_serialize!(i32);
impl_scalar_serialize!(i64);
impl_scalar_serialize!(f32);
impl_scalar_serialize!(f64);

// One byte on the wire. No contiguous-run override: a bit-packed container
// cannot expose addressable scalar storage, so runs of bool always go
// element by element.
impl Serialize for bool {
    fn serialize<P: Packer>(&self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
        serializer.scalar(*self as u8)
    }
}

impl Deserialize for bool {
    fn deserialize<P: Packer>(&mut self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
        let mut byte = 0u8;
        serializer.scalar_mut(&mut byte)?;
        *self = match byte {
            0 => false,
            1 => true,
            _ => return Err(ErrorKind::InvalidBool.into()),
        };
        Ok(())
    }
}

// Carried as u64 so that hosts with different pointer widths agree on the
// layout; this is also what container counts and enum indices travel as.
impl Serialize for usize {
    fn serialize<P: Packer>(&self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
        serializer.scalar(*self as u64)
    }
}

impl Deserialize for usize {
    fn deserialize<P: Packer>(&mut self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
        let mut wide = 0u64;
        serializer.scalar_mut(&mut wide)?;
        *self = usize::try_from(wide).map_err(|_| ErrorKind::LengthOverflow)?;
        Ok(())
    }
}

impl Serialize for String {
    fn serialize<P: Packer>(&self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
        serializer.string(self)
    }
}

impl Deserialize for String {
    fn deserialize<P: Packer>(&mut self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
        *self = serializer.string_mut()?;
        Ok(())
    }
}
