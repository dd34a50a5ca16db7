//! `serde` support for [`DynamicArray`], enabled with the `serde` feature.
//!
//! An array serializes as a plain sequence of its live elements. Deserializing
//! appends every element in order, so the rebuilt array's capacity follows the
//! normal growth policy rather than whatever the source array had.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{Error as _, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::DynamicArray;

impl<T: Serialize> Serialize for DynamicArray<T> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self.live().iter().flatten() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

struct DynamicArrayVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for DynamicArrayVisitor<T> {
    type Value = DynamicArray<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> core::result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut array = DynamicArray::new();
        while let Some(element) = seq.next_element::<T>()? {
            array.insert_back(element).map_err(|e| {
                A::Error::custom(format!("Failed to append deserialized element: {}", e))
            })?;
        }
        Ok(array)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for DynamicArray<T> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(DynamicArrayVisitor(PhantomData))
    }
}
