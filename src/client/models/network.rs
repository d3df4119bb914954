//! Network models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::OrganizationId;

/// Dashboard network
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// Network ID (e.g. `N_1234` or `L_1234`)
    pub id: String,

    /// Owning organization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<OrganizationId>,

    /// Network name
    pub name: String,

    /// Network type (wireless, appliance, combined, ...)
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub network_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,

    /// Fields not modeled explicitly
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Configuration template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigTemplate {
    /// Template ID
    pub id: String,

    /// Template name
    pub name: String,

    /// Fields not modeled explicitly
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
