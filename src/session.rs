//! Dashboard session and organization scope
//!
//! A [`DashboardSession`] fetches the organizations visible to the API key
//! when it is created, then holds a single selected organization. Scoped
//! calls check the selection before anything is sent.

use std::fmt;

use serde_json::Value;

use crate::admin::{AdminOutcome, AdminParams};
use crate::client::{
    Admin, ConfigTemplate, Device, MerakiApi, MerakiClient, Network, Organization, OrganizationId,
};
use crate::error::{ApiError, Result};

/// The organization every scoped call is issued against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgScope {
    pub id: OrganizationId,
    pub name: String,
}

/// Dashboard session with organization scope
pub struct DashboardSession<A = MerakiClient> {
    api: A,
    organizations: Vec<Organization>,
    scope: Option<OrgScope>,
}

impl DashboardSession<MerakiClient> {
    /// Connect to the production Dashboard and fetch the organization list.
    pub async fn connect(api_key: impl Into<String>) -> Result<Self> {
        Self::new(MerakiClient::new(api_key)?).await
    }

    /// Connect with an optional base URL override.
    pub async fn connect_with_base_url(
        api_key: impl Into<String>,
        base_url: Option<String>,
    ) -> Result<Self> {
        Self::new(MerakiClient::with_base_url(api_key, base_url)?).await
    }
}

impl<A: MerakiApi> DashboardSession<A> {
    /// Wrap an API client and fetch the organizations it can see.
    ///
    /// This is the only call that needs no selected organization.
    pub async fn new(api: A) -> Result<Self> {
        let organizations = api.list_organizations().await?;
        log::debug!("Session sees {} organizations", organizations.len());

        Ok(Self {
            api,
            organizations,
            scope: None,
        })
    }

    /// The underlying API client
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Organizations fetched when the session was created
    pub fn organizations(&self) -> &[Organization] {
        &self.organizations
    }

    /// Re-fetch the organization list. The current selection is kept.
    pub async fn refresh_organizations(&mut self) -> Result<()> {
        self.organizations = self.api.list_organizations().await?;
        Ok(())
    }

    /// Select the organization matching `identifier` by name or by id.
    ///
    /// Numeric and string ids are equivalent: `123` and `"123"` select the
    /// same organization. Any previous selection is cleared first, so a
    /// failed selection leaves the session unscoped.
    pub fn select_organization(&mut self, identifier: impl fmt::Display) -> Result<&OrgScope> {
        let identifier = identifier.to_string();
        self.scope = None;

        let org = self
            .organizations
            .iter()
            .find(|org| org.matches(&identifier))
            .ok_or(ApiError::OrganizationNotPermitted(identifier))?;

        Ok(self.scope.insert(OrgScope {
            id: org.id.clone(),
            name: org.name.clone(),
        }))
    }

    /// Drop the current selection
    pub fn clear_organization(&mut self) {
        self.scope = None;
    }

    pub fn organization_id(&self) -> Option<&OrganizationId> {
        self.scope.as_ref().map(|scope| &scope.id)
    }

    pub fn organization_name(&self) -> Option<&str> {
        self.scope.as_ref().map(|scope| scope.name.as_str())
    }

    /// The selected organization id, or `OrganizationRequired`
    pub fn require_org(&self) -> Result<&OrganizationId> {
        self.organization_id()
            .ok_or_else(|| ApiError::OrganizationRequired.into())
    }

    // ========================================================================
    // Listings
    // ========================================================================

    /// List organizations (unscoped)
    pub async fn list_organizations(&self) -> Result<Vec<Organization>> {
        self.api.list_organizations().await
    }

    pub async fn list_config_templates(&self) -> Result<Vec<ConfigTemplate>> {
        let org_id = self.require_org()?;
        self.api.list_config_templates(org_id).await
    }

    pub async fn list_networks(&self) -> Result<Vec<Network>> {
        let org_id = self.require_org()?;
        self.api.list_networks(org_id).await
    }

    pub async fn list_admins(&self) -> Result<Vec<Admin>> {
        let org_id = self.require_org()?;
        self.api.list_admins(org_id).await
    }

    /// List devices in a network. Requires a selected organization even
    /// though the path only names the network.
    pub async fn list_devices(&self, network_id: &str) -> Result<Vec<Device>> {
        self.require_org()?;
        self.api.list_devices(network_id).await
    }

    pub async fn get_device(&self, network_id: &str, serial: &str) -> Result<Device> {
        self.require_org()?;
        self.api.get_device(network_id, serial).await
    }

    // ========================================================================
    // Administrators
    // ========================================================================

    /// Create an administrator, or update one when `admin_id` is given.
    ///
    /// Invalid inputs come back as [`AdminOutcome::Rejected`] without any
    /// request being sent. An `Email...` conflict from the API comes back as
    /// [`AdminOutcome::Applied`] carrying the error payload.
    pub async fn add_or_update_admin(
        &self,
        params: AdminParams,
        admin_id: Option<&str>,
    ) -> Result<AdminOutcome> {
        let request = match params.into_request() {
            Ok(request) => request,
            Err(reason) => {
                log::warn!("Administrator request rejected: {}", reason);
                return Ok(AdminOutcome::Rejected(reason));
            }
        };

        let org_id = self.require_org()?;
        let payload = match admin_id {
            Some(admin_id) => self.api.update_admin(org_id, admin_id, &request).await?,
            None => self.api.create_admin(org_id, &request).await?,
        };

        Ok(AdminOutcome::Applied(payload))
    }

    pub async fn add_admin(&self, params: AdminParams) -> Result<AdminOutcome> {
        self.add_or_update_admin(params, None).await
    }

    pub async fn update_admin(&self, admin_id: &str, params: AdminParams) -> Result<AdminOutcome> {
        self.add_or_update_admin(params, Some(admin_id)).await
    }

    /// Revoke an administrator's access to the selected organization
    pub async fn delete_admin(&self, admin_id: &str) -> Result<Value> {
        let org_id = self.require_org()?;
        self.api.delete_admin(org_id, admin_id).await
    }
}

impl<A> fmt::Debug for DashboardSession<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardSession")
            .field("organizations", &self.organizations.len())
            .field("scope", &self.scope)
            .finish()
    }
}
