use super::Serializer;
use crate::error::Error;
use crate::packer::Packer;

/// The type can rebuild itself, in place, from a [`Serializer`]'s read pass.
///
/// The member-order contract of [`Serialize`](super::Serialize) applies:
/// both directions must visit the same members in the same order.
pub trait Deserialize {
    /// Read this value from the serializer's buffer, replacing the contents
    /// of `self`.
    fn deserialize<P: Packer>(&mut self, serializer: &mut Serializer<'_, P>) -> Result<(), Error>;

    /// Read a contiguous run of values into `values`.
    ///
    /// Overridden by fixed-width scalars, see
    /// [`Serialize::serialize_slice`](super::Serialize::serialize_slice).
    fn deserialize_slice<P: Packer>(values: &mut [Self], serializer: &mut Serializer<'_, P>) -> Result<(), Error>
    where
        Self: Sized,
    {
        for value in values {
            value.deserialize(serializer)?;
        }
        Ok(())
    }
}
