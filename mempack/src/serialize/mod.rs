//! The serialization traits and the recursive engine that drives them.

mod deserialize;
mod serialize;
mod serializer;

pub use deserialize::Deserialize;
pub use serialize::Serialize;
pub use serializer::Serializer;
