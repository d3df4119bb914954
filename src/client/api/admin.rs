//! Administrator management API trait

use async_trait::async_trait;
use serde_json::Value;

use crate::admin::AdminRequest;
use crate::client::models::OrganizationId;
use crate::error::Result;

/// Administrator write operations
///
/// Responses are returned as decoded JSON. A `400` whose first error begins
/// with `Email` comes back as a payload rather than an error, so callers
/// inspect it themselves.
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// Create an administrator (`POST /organizations/{org}/admins`)
    async fn create_admin(&self, org_id: &OrganizationId, request: &AdminRequest) -> Result<Value>;

    /// Update an administrator (`POST /organizations/{org}/admins/{id}`)
    async fn update_admin(
        &self,
        org_id: &OrganizationId,
        admin_id: &str,
        request: &AdminRequest,
    ) -> Result<Value>;

    /// Revoke an administrator (`DELETE /organizations/{org}/admins/{id}`)
    async fn delete_admin(&self, org_id: &OrganizationId, admin_id: &str) -> Result<Value>;
}
