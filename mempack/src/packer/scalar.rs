use crate::byte_order::ByteOrder;

/// A fixed-width primitive that maps to a byte run of statically known
/// length.
///
/// Scalars are the leaves of the serialization dispatch; every other shape is
/// reduced to scalars and strings by the shape handlers. A scalar converts
/// itself to and from bytes in the byte order the packer selects; the packer
/// decides where those bytes go.
pub trait Scalar: Copy + Default {
    /// The number of bytes the packed representation occupies.
    const WIDTH: usize;

    /// Encode into `out`, which is exactly [`Self::WIDTH`] bytes long.
    fn put(self, byte_order: ByteOrder, out: &mut [u8]);

    /// Decode from `bytes`, which is exactly [`Self::WIDTH`] bytes long.
    fn get(byte_order: ByteOrder, bytes: &[u8]) -> Self;
}

macro_rules! impl_scalar {
    ($type:ty) => {
        impl Scalar for $type {
            const WIDTH: usize = size_of::<$type>();

            fn put(self, byte_order: ByteOrder, out: &mut [u8]) {
                let bytes = match byte_order {
                    ByteOrder::BigEndian => self.to_be_bytes(),
                    ByteOrder::LittleEndian => self.to_le_bytes(),
                };
                out.copy_from_slice(&bytes);
            }

            fn get(byte_order: ByteOrder, bytes: &[u8]) -> Self {
                let bytes = bytes.try_into().expect("a scalar byte run must be WIDTH bytes");
                match byte_order {
                    ByteOrder::BigEndian => Self::from_be_bytes(bytes),
                    ByteOrder::LittleEndian => Self::from_le_bytes(bytes),
                }
            }
        }
    };
}

impl_scalar!(u8);
impl_scalar!(u16);
impl_scalar!(u32);
impl_scalar!(u64);
impl_scalar!(i8);
impl_scalar!(i16);
impl_scalar!(i32);
impl_scalar!(i64);
impl_scalar!(f32);
impl_scalar!(f64);
