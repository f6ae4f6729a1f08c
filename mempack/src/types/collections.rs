use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

use crate::error::Error;
use crate::packer::Packer;
use crate::serialize::{Deserialize, Serialize, Serializer};

// Associative containers are their entry count followed by the entries in
// the container's native iteration order: sorted for the B-tree containers,
// unspecified for the hash containers. Buffers produced from hash containers
// are therefore not byte-reproducible across processes; use the B-tree
// containers where that matters.
//
// Reading goes entry by entry through the container's own insert, so
// duplicate keys in a crafted stream collapse exactly as a duplicate insert
// would (std containers: the last entry wins).

impl<K: Serialize, V: Serialize> Serialize for BTreeMap<K, V> {
    fn serialize<P: Packer>(&self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
        self.len().serialize(serializer)?;
        for (key, value) in self {
            key.serialize(serializer)?;
            value.serialize(serializer)?;
        }
        Ok(())
    }
}

impl<K, V> Deserialize for BTreeMap<K, V>
where
    K: Deserialize + Default + Ord,
    V: Deserialize + Default,
{
    fn deserialize<P: Packer>(&mut self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
        let mut len = 0usize;
        len.deserialize(serializer)?;
        self.clear();
        for _ in 0..len {
            let mut entry = (K::default(), V::default());
            entry.deserialize(serializer)?;
            self.insert(entry.0, entry.1);
        }
        Ok(())
    }
}

impl<K: Serialize, V: Serialize, S> Serialize for HashMap<K, V, S> {
    fn serialize<P: Packer>(&self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
        self.len().serialize(serializer)?;
        for (key, value) in self {
            key.serialize(serializer)?;
            value.serialize(serializer)?;
        }
        Ok(())
    }
}

impl<K, V, S> Deserialize for HashMap<K, V, S>
where
    K: Deserialize + Default + Eq + Hash,
    V: Deserialize + Default,
    S: BuildHasher,
{
    fn deserialize<P: Packer>(&mut self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
        let mut len = 0usize;
        len.deserialize(serializer)?;
        self.clear();
        for _ in 0..len {
            let mut entry = (K::default(), V::default());
            entry.deserialize(serializer)?;
            self.insert(entry.0, entry.1);
        }
        Ok(())
    }
}

impl<K: Serialize> Serialize for BTreeSet<K> {
    fn serialize<P: Packer>(&self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
        self.len().serialize(serializer)?;
        for key in self {
            key.serialize(serializer)?;
        }
        Ok(())
    }
}

impl<K> Deserialize for BTreeSet<K>
where
    K: Deserialize + Default + Ord,
{
    fn deserialize<P: Packer>(&mut self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
        let mut len = 0usize;
        len.deserialize(serializer)?;
        self.clear();
        for _ in 0..len {
            let mut key = K::default();
            key.deserialize(serializer)?;
            self.insert(key);
        }
        Ok(())
    }
}

impl<K: Serialize, S> Serialize for HashSet<K, S> {
    fn serialize<P: Packer>(&self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
        self.len().serialize(serializer)?;
        for key in self {
            key.serialize(serializer)?;
        }
        Ok(())
    }
}

impl<K, S> Deserialize for HashSet<K, S>
where
    K: Deserialize + Default + Eq + Hash,
    S: BuildHasher,
{
    fn deserialize<P: Packer>(&mut self, serializer: &mut Serializer<'_, P>) -> Result<(), Error> {
        let mut len = 0usize;
        len.deserialize(serializer)?;
        self.clear();
        for _ in 0..len {
            let mut key = K::default();
            key.deserialize(serializer)?;
            self.insert(key);
        }
        Ok(())
    }
}
