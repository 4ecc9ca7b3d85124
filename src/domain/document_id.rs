//! Type-safe document identifier.
//!
//! [`DocumentId`] is a newtype wrapper around a BSON [`ObjectId`] so that
//! store-assigned identifiers cannot be confused with free-form strings
//! coming in from clients.

use std::fmt;
use std::str::FromStr;

use mongodb::bson::oid::{self, ObjectId};
use serde::{Deserialize, Serialize};

/// Identifier of a stored event or booking document.
///
/// Assigned once at insert time and immutable thereafter. On the wire it
/// is rendered as the 24-character lowercase hex form of the ObjectId.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(ObjectId);

impl DocumentId {
    /// Creates a fresh `DocumentId`.
    #[must_use]
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// Creates a `DocumentId` from an existing [`ObjectId`].
    #[must_use]
    pub const fn from_object_id(oid: ObjectId) -> Self {
        Self(oid)
    }

    /// Returns the inner [`ObjectId`].
    #[must_use]
    pub const fn as_object_id(&self) -> &ObjectId {
        &self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl FromStr for DocumentId {
    type Err = oid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s).map(Self)
    }
}

impl From<ObjectId> for DocumentId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl From<DocumentId> for ObjectId {
    fn from(id: DocumentId) -> Self {
        id.0
    }
}
