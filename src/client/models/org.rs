//! Organization models

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Organization identifier.
///
/// The dashboard has served ids both as JSON numbers and as strings, so the
/// id is normalized to its string form on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OrganizationId(String);

impl OrganizationId {
    /// Create an id from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for OrganizationId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for OrganizationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for OrganizationId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => Self(id),
            RawId::Unsigned(id) => Self(id.to_string()),
            RawId::Signed(id) => Self(id.to_string()),
        })
    }
}

/// Organization resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    /// Organization ID
    pub id: OrganizationId,

    /// Organization name
    pub name: String,

    /// Fields not modeled explicitly
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Organization {
    /// Build an organization with no extra fields
    pub fn new(id: impl Into<OrganizationId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// Whether `identifier` names this organization by name or by id
    pub fn matches(&self, identifier: &str) -> bool {
        self.name == identifier || self.id.as_str() == identifier
    }
}
