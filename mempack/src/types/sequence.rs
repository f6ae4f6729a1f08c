use crate::error::Error;
use crate::packer::Packer;
use crate::serialize::{Deserialize, Serialize, Serializer};

// A sequence is its element count followed by the elements in order. The
// count travels as u64 (via the usize impl); scalar elements go through the
// packer as one contiguous run, everything else element by element.
impl<T: Serialize> Serialize for Vec<T> {
    fn serialize<P: Packer>(&self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
        self.len().serialize(serializer)?;
        T::serialize_slice(self, serializer)
    }
}

impl<T: Deserialize + Default> Deserialize for Vec<T> {
    fn deserialize<P: Packer>(&mut self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
        let mut len = 0usize;
        len.deserialize(serializer)?;
        self.clear();
        self.resize_with(len, T::default);
        T::deserialize_slice(self, serializer)
    }
}

// Fixed-size arrays have a static length, so no count is serialized.
impl<T: Serialize, const N: usize> Serialize for [T; N] {
    fn serialize<P: Packer>(&self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
        T::serialize_slice(self, serializer)
    }
}

impl<T: Deserialize, const N: usize> Deserialize for [T; N] {
    fn deserialize<P: Packer>(&mut self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
        T::deserialize_slice(self, serializer)
    }
}
