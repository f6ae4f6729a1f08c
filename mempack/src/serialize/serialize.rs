use super::Serializer;
use crate::error::Error;
use crate::packer::Packer;

/// The type can describe itself to a [`Serializer`] for the size and write
/// passes.
///
/// An implementation must visit the same members, in the same order, on
/// every call — and in the same order as the matching
/// [`Deserialize`](super::Deserialize) impl. The order is not recorded in
/// the buffer, so a divergence between the two directions corrupts data
/// silently instead of failing.
///
/// Derive this for structs and enums, or implement it by hand to control
/// which members participate in the wire format; members an impl leaves out
/// (caches, derived values) are simply never serialized.
pub trait Serialize {
    /// Measure or write this value, depending on the serializer's pass.
    fn serialize<P: Packer>(&self, serializer: &mut Serializer<'_, P>) -> Result<(), Error>;

    /// Measure or write a contiguous run of values.
    ///
    /// The default visits each element in turn. Fixed-width scalars override
    /// this to hand the whole run to the packer at once; the packer
    /// guarantees the byte layout is identical either way.
    fn serialize_slice<P: Packer>(values: &[Self], serializer: &mut Serializer<'_, P>) -> Result<(), Error>
    where
        Self: Sized,
    {
        for value in values {
            value.serialize(serializer)?;
        }
        Ok(())
    }
}
