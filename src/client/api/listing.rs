//! Listing API trait for collection operations

use async_trait::async_trait;

use crate::client::models::{Admin, ConfigTemplate, Device, Network, Organization, OrganizationId};
use crate::error::Result;

/// Read operations against the Meraki Dashboard API
///
/// Organization-scoped calls take the organization id explicitly; the
/// selected-scope bookkeeping lives in [`DashboardSession`](crate::DashboardSession).
#[async_trait]
pub trait ListingApi: Send + Sync {
    // ========================================================================
    // Organizations
    // ========================================================================

    /// List organizations visible to the API key (`GET /organizations`)
    async fn list_organizations(&self) -> Result<Vec<Organization>>;

    /// List configuration templates (`GET /organizations/{org}/configTemplates`)
    async fn list_config_templates(&self, org_id: &OrganizationId) -> Result<Vec<ConfigTemplate>>;

    /// List networks (`GET /organizations/{org}/networks`)
    async fn list_networks(&self, org_id: &OrganizationId) -> Result<Vec<Network>>;

    /// List administrators (`GET /organizations/{org}/admins`)
    async fn list_admins(&self, org_id: &OrganizationId) -> Result<Vec<Admin>>;

    // ========================================================================
    // Devices
    // ========================================================================

    /// List devices in a network (`GET /networks/{net}/devices`)
    async fn list_devices(&self, network_id: &str) -> Result<Vec<Device>>;

    /// Get one device (`GET /networks/{net}/devices/{serial}`)
    async fn get_device(&self, network_id: &str, serial: &str) -> Result<Device>;
}
