//! Validated, serializable records held by a [`ListManager`](crate::manager::ListManager)

use crate::error::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cmp::Ordering;

/// Identifier assigned by a manager to each entry it holds
///
/// Ids are handed out monotonically per manager instance and are never
/// persisted, so the data files keep their plain array-of-records shape.
pub type EntryId = u64;

/// Capability contract shared by every record kind
///
/// An entity can only be obtained through its validating constructor or
/// through [`Entity::from_mapping`], which runs the same validation. Anything
/// a manager stores is therefore valid by construction.
pub trait Entity: Clone + PartialEq + Sized {
    /// Plain serializable form written to the data file
    type Mapping: Serialize + DeserializeOwned;

    /// Human readable kind, used in log and error messages
    const KIND: &'static str;

    fn to_mapping(&self) -> Self::Mapping;

    fn from_mapping(mapping: Self::Mapping) -> Result<Self>;

    /// Position of `self` relative to `other` in the managed collection
    ///
    /// The default keeps insertion order. Time-ordered entities override it.
    fn ordering(&self, _other: &Self) -> Ordering {
        Ordering::Equal
    }
}

/// An entity together with the id its manager assigned to it
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<E> {
    pub id: EntryId,
    pub entity: E,
}
