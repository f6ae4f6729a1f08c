use crate::error::Error;
use crate::packer::Packer;
use crate::serialize::{Deserialize, Serialize, Serializer};

// Tuples flatten: each element in declared order, no prefix, since the
// arity is static. Packing a tuple of independent top-level values is the
// multi-value form of Serializer::pack.
macro_rules! impl_tuple_serialize {
    ($($member:ident: $index:tt),+) => {
        impl<$($member: Serialize),+> Serialize for ($($member,)+) {
            fn serialize<P: Packer>(&self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
                $(self.$index.serialize(serializer)?;)+
                Ok(())
            }
        }

        impl<$($member: Deserialize),+> Deserialize for ($($member,)+) {
            fn deserialize<P: Packer>(&mut self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
                $(self.$index.deserialize(serializer)?;)+
                Ok(())
            }
        }
    };
}

impl_tuple_serialize!(A: 0);
impl_tuple_serialize!(A: 0, B: 1);
impl_tuple_serialize!(A: 0, B: 1, C: 2);
impl_tuple_serialize!(A: 0, B: 1, C: 2, D: 3);
impl_tuple_serialize!(A: 0, B: 1, C: 2, D: 3, E: 4);
impl_tuple_serialize!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
impl_tuple_serialize!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6);
impl_tuple_serialize!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7);
