//! `serde` support: a set is serialized as the ascending sequence of its members.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::BitSet;

impl Serialize for BitSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for BitSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(MembersVisitor)
    }
}

struct MembersVisitor;

impl<'de> de::Visitor<'de> for MembersVisitor {
    type Value = BitSet;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("a sequence of i64 values")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<BitSet, A::Error> {
        let mut set = BitSet::new();
        while let Some(value) = seq.next_element::<i64>()? {
            set.insert(value);
        }
        Ok(set)
    }
}
