//! Administrator display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{EMPTY, or_dash};
use merakiop::Admin;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AdminDisplay {
    #[tabled(rename = "ADMIN ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "ORG ACCESS")]
    pub org_access: String,

    /// `tag:access` pairs
    #[tabled(rename = "TAGS")]
    pub tags: String,

    /// `network:access` pairs
    #[tabled(rename = "NETWORKS")]
    pub networks: String,
}

fn pairs<'a>(items: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    let joined = items
        .map(|(scope, access)| format!("{}:{}", scope, access))
        .collect::<Vec<_>>()
        .join(", ");

    if joined.is_empty() {
        EMPTY.to_string()
    } else {
        joined
    }
}

impl From<Admin> for AdminDisplay {
    fn from(admin: Admin) -> Self {
        Self {
            org_access: or_dash(admin.org_access.as_deref()),
            tags: pairs(admin.tags.iter().map(|t| (t.tag.as_str(), t.access.as_str()))),
            networks: pairs(admin.networks.iter().map(|n| (n.id.as_str(), n.access.as_str()))),
            id: admin.id,
            name: admin.name,
            email: admin.email,
        }
    }
}
