//! Administrator request building
//!
//! [`AdminParams`] collects the loose inputs of an add/update call (access
//! level, parallel tag/access and network/access lists). Turning it into an
//! [`AdminRequest`] checks the pairing rules before any request is sent;
//! failures come back as [`AdminRequestError`] and the session wraps them in
//! [`AdminOutcome::Rejected`].

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::client::models::{NetworkAccess, TagAccess};

/// Why an administrator request was rejected before reaching the API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminRequestError {
    #[error("Administrators must be granted access to an organization, networks, or tags")]
    MissingAccessScope,

    #[error("Tags were given without matching access levels (e.g. tags [t1, t2] need access [full, read-only])")]
    TagsWithoutAccess,

    #[error("Tag access levels were given without matching tags")]
    TagAccessWithoutTags,

    #[error("Got {tags} tags but {access} tag access levels; the counts must match")]
    TagCountMismatch { tags: usize, access: usize },

    #[error("Networks were given without matching access levels (e.g. networks [n1, n2] need access [full, read-only])")]
    NetworksWithoutAccess,

    #[error("Network access levels were given without matching networks")]
    NetAccessWithoutNetworks,

    #[error("Got {networks} networks but {access} network access levels; the counts must match")]
    NetworkCountMismatch { networks: usize, access: usize },
}

/// Inputs for creating or updating an administrator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminParams {
    pub email: String,
    pub name: String,
    pub org_access: Option<String>,
    pub tags: Option<Vec<String>>,
    pub tag_access: Option<Vec<String>>,
    pub networks: Option<Vec<String>>,
    pub net_access: Option<Vec<String>>,
}

impl AdminParams {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Organization-wide access level (`full`, `read-only`, `none`)
    pub fn org_access(mut self, access: impl Into<String>) -> Self {
        self.org_access = Some(access.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn tag_access<I, S>(mut self, access: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tag_access = Some(access.into_iter().map(Into::into).collect());
        self
    }

    pub fn networks<I, S>(mut self, networks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.networks = Some(networks.into_iter().map(Into::into).collect());
        self
    }

    pub fn net_access<I, S>(mut self, access: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.net_access = Some(access.into_iter().map(Into::into).collect());
        self
    }

    /// Validate the inputs and build the POST body.
    pub fn into_request(self) -> Result<AdminRequest, AdminRequestError> {
        if self.org_access.is_none() && self.tags.is_none() && self.networks.is_none() {
            return Err(AdminRequestError::MissingAccessScope);
        }

        let tags = match (self.tags, self.tag_access) {
            (None, None) => Vec::new(),
            (Some(_), None) => return Err(AdminRequestError::TagsWithoutAccess),
            (None, Some(_)) => return Err(AdminRequestError::TagAccessWithoutTags),
            (Some(tags), Some(access)) if tags.len() != access.len() => {
                return Err(AdminRequestError::TagCountMismatch {
                    tags: tags.len(),
                    access: access.len(),
                });
            }
            (Some(tags), Some(access)) => tags
                .into_iter()
                .zip(access)
                .map(|(tag, access)| TagAccess { tag, access })
                .collect(),
        };

        let networks = match (self.networks, self.net_access) {
            (None, None) => Vec::new(),
            (Some(_), None) => return Err(AdminRequestError::NetworksWithoutAccess),
            (None, Some(_)) => return Err(AdminRequestError::NetAccessWithoutNetworks),
            (Some(networks), Some(access)) if networks.len() != access.len() => {
                return Err(AdminRequestError::NetworkCountMismatch {
                    networks: networks.len(),
                    access: access.len(),
                });
            }
            (Some(networks), Some(access)) => networks
                .into_iter()
                .zip(access)
                .map(|(id, access)| NetworkAccess { id, access })
                .collect(),
        };

        Ok(AdminRequest {
            name: self.name,
            email: self.email,
            org_access: self.org_access,
            tags,
            networks,
        })
    }
}

/// POST body for the admins endpoint.
///
/// `orgAccess` is always present (null when unset). `tags` and `networks`
/// only appear when non-empty; the endpoint rejects empty lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRequest {
    pub name: String,
    pub email: String,
    pub org_access: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagAccess>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<NetworkAccess>,
}

/// Result of an add/update call
#[derive(Debug, Clone, PartialEq)]
pub enum AdminOutcome {
    /// The request was sent; this is the decoded response payload
    Applied(Value),
    /// The inputs were rejected locally and nothing was sent
    Rejected(AdminRequestError),
}

impl AdminOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, AdminOutcome::Applied(_))
    }

    /// Response payload, if the request was sent
    pub fn payload(&self) -> Option<&Value> {
        match self {
            AdminOutcome::Applied(payload) => Some(payload),
            AdminOutcome::Rejected(_) => None,
        }
    }

    pub fn into_payload(self) -> Option<Value> {
        match self {
            AdminOutcome::Applied(payload) => Some(payload),
            AdminOutcome::Rejected(_) => None,
        }
    }

    /// Rejection reason, if the request was not sent
    pub fn rejection(&self) -> Option<&AdminRequestError> {
        match self {
            AdminOutcome::Applied(_) => None,
            AdminOutcome::Rejected(reason) => Some(reason),
        }
    }
}
