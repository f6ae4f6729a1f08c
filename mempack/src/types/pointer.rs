use crate::error::Error;
use crate::packer::Packer;
use crate::serialize::{Deserialize, Serialize, Serializer};

// An optional is a presence flag, then the payload if present. Reading a
// populated slot replaces whatever the destination held with a freshly
// default-constructed payload before reading into it.
impl<T: Serialize> Serialize for Option<T> {
    fn serialize<P: Packer>(&self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
        self.is_some().serialize(serializer)?;
        if let Some(value) = self {
            value.serialize(serializer)?;
        }
        Ok(())
    }
}

impl<T: Deserialize + Default> Deserialize for Option<T> {
    fn deserialize<P: Packer>(&mut self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
        let mut has = false;
        has.deserialize(serializer)?;
        if has {
            let mut value = T::default();
            value.deserialize(serializer)?;
            *self = Some(value);
        } else {
            *self = None;
        }
        Ok(())
    }
}

// A box serializes as its pointee; ownership stays with the one box. The
// nullable owning pointer is Option<Box<T>>, which composes the presence
// flag with a fresh allocation on read and drops any prior pointee when the
// option is overwritten.
impl<T: Serialize> Serialize for Box<T> {
    fn serialize<P: Packer>(&self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
        (**self).serialize(serializer)
    }
}

impl<T: Deserialize + Default> Deserialize for Box<T> {
    fn deserialize<P: Packer>(&mut self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
        **self = T::default();
        (**self).deserialize(serializer)
    }
}
