//! Administrator models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Tag-scoped access grant (`{tag, access}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagAccess {
    pub tag: String,
    pub access: String,
}

/// Network-scoped access grant (`{id, access}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkAccess {
    pub id: String,
    pub access: String,
}

/// Organization administrator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    /// Admin ID
    pub id: String,

    pub name: String,

    pub email: String,

    /// Organization-wide access level (full, read-only, none)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_access: Option<String>,

    #[serde(default)]
    pub tags: Vec<TagAccess>,

    #[serde(default)]
    pub networks: Vec<NetworkAccess>,

    /// Fields not modeled explicitly
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
