//! Entity contract shared by every record type held in an `EntityStore`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// A record type that can live in an entity store.
///
/// The store owns ID assignment and the creation timestamp; the entity
/// only knows how to build itself from a create input and how to merge a
/// partial update into itself.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Display name used in not-found and confirmation messages.
    const KIND: &'static str;

    /// Caller-supplied fields for a new record.
    type Create: Send;

    /// Caller-supplied fields for a partial update.
    type Update: Send;

    /// Build a record from its input plus the store-assigned id and timestamp.
    fn from_create(id: i64, created_at: DateTime<Utc>, input: Self::Create) -> Self;

    /// Overwrite exactly the fields present in `update`.
    ///
    /// Implementations must never touch `id` or `created_at`.
    fn apply(&mut self, update: Self::Update);
}

/// Deserialize an update field that, when present, must carry a value.
///
/// Combined with `#[serde(default)]` an absent key becomes `None`, while an
/// explicit `null` is rejected instead of being read as "not supplied".
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
