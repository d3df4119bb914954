//! Mock Meraki API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{AdminApi, ListingApi};
use super::models::{Admin, ConfigTemplate, Device, Network, Organization, OrganizationId};
use crate::admin::AdminRequest;
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockMerakiClient::new()
///     .with_orgs(vec![Organization::new(123u64, "Acme")])
///     .await;
///
/// let orgs = mock.list_organizations().await?;
/// assert_eq!(orgs.len(), 1);
/// ```
#[derive(Default)]
pub struct MockMerakiClient {
    /// Organizations to return from list_organizations
    orgs: Arc<Mutex<Vec<Organization>>>,
    /// Networks to return from list_networks
    networks: Arc<Mutex<Vec<Network>>>,
    /// Devices to return from list_devices / get_device
    devices: Arc<Mutex<Vec<Device>>>,
    /// Templates to return from list_config_templates
    templates: Arc<Mutex<Vec<ConfigTemplate>>>,
    /// Admins to return from list_admins
    admins: Arc<Mutex<Vec<Admin>>>,
    /// Payload to return from admin writes
    admin_response: Arc<Mutex<Option<Value>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_organizations: usize,
    pub list_config_templates: usize,
    pub list_networks: usize,
    pub list_admins: usize,
    pub list_devices: usize,
    pub get_device: usize,
    pub create_admin: usize,
    pub update_admin: usize,
    pub delete_admin: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.list_organizations
            + self.list_config_templates
            + self.list_networks
            + self.list_admins
            + self.list_devices
            + self.get_device
            + self.create_admin
            + self.update_admin
            + self.delete_admin
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// The API method called (e.g., "list_networks", "update_admin")
    pub method: String,
    /// Organization ID if the call was org-scoped
    pub org_id: Option<String>,
    /// Network, device or admin identifier if provided
    pub target: Option<String>,
    /// Serialized body for admin writes
    pub body: Option<Value>,
}

impl MockMerakiClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure organizations to return from list_organizations.
    pub async fn with_orgs(self, orgs: Vec<Organization>) -> Self {
        *self.orgs.lock().await = orgs;
        self
    }

    /// Configure networks to return from list_networks.
    pub async fn with_networks(self, networks: Vec<Network>) -> Self {
        *self.networks.lock().await = networks;
        self
    }

    /// Configure devices to return from list_devices and get_device.
    pub async fn with_devices(self, devices: Vec<Device>) -> Self {
        *self.devices.lock().await = devices;
        self
    }

    /// Configure templates to return from list_config_templates.
    pub async fn with_templates(self, templates: Vec<ConfigTemplate>) -> Self {
        *self.templates.lock().await = templates;
        self
    }

    /// Configure admins to return from list_admins.
    pub async fn with_admins(self, admins: Vec<Admin>) -> Self {
        *self.admins.lock().await = admins;
        self
    }

    /// Configure the payload returned by create/update/delete admin.
    pub async fn with_admin_response(self, payload: Value) -> Self {
        *self.admin_response.lock().await = Some(payload);
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }

    /// Record a captured request for test assertions.
    async fn capture_request(
        &self,
        method: &str,
        org_id: Option<&OrganizationId>,
        target: Option<&str>,
        body: Option<&AdminRequest>,
    ) {
        let mut requests = self.captured_requests.lock().await;
        requests.push(CapturedRequest {
            method: method.to_string(),
            org_id: org_id.map(|id| id.to_string()),
            target: target.map(|s| s.to_string()),
            body: body.and_then(|b| serde_json::to_value(b).ok()),
        });
    }

    async fn admin_payload(&self) -> Value {
        self.admin_response
            .lock()
            .await
            .clone()
            .unwrap_or_else(|| serde_json::json!({}))
    }
}

// ============================================================================
// ListingApi Implementation
// ============================================================================

#[async_trait]
impl ListingApi for MockMerakiClient {
    async fn list_organizations(&self) -> Result<Vec<Organization>> {
        self.capture_request("list_organizations", None, None, None)
            .await;
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.list_organizations += 1;

        Ok(self.orgs.lock().await.clone())
    }

    async fn list_config_templates(&self, org_id: &OrganizationId) -> Result<Vec<ConfigTemplate>> {
        self.capture_request("list_config_templates", Some(org_id), None, None)
            .await;
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.list_config_templates += 1;

        Ok(self.templates.lock().await.clone())
    }

    async fn list_networks(&self, org_id: &OrganizationId) -> Result<Vec<Network>> {
        self.capture_request("list_networks", Some(org_id), None, None)
            .await;
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.list_networks += 1;

        Ok(self.networks.lock().await.clone())
    }

    async fn list_admins(&self, org_id: &OrganizationId) -> Result<Vec<Admin>> {
        self.capture_request("list_admins", Some(org_id), None, None)
            .await;
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.list_admins += 1;

        Ok(self.admins.lock().await.clone())
    }

    async fn list_devices(&self, network_id: &str) -> Result<Vec<Device>> {
        self.capture_request("list_devices", None, Some(network_id), None)
            .await;
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.list_devices += 1;

        Ok(self.devices.lock().await.clone())
    }

    async fn get_device(&self, network_id: &str, serial: &str) -> Result<Device> {
        self.capture_request("get_device", None, Some(network_id), None)
            .await;
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.get_device += 1;
        drop(counts);

        let devices = self.devices.lock().await;
        devices
            .iter()
            .find(|d| d.serial == serial)
            .cloned()
            .ok_or_else(|| {
                ApiError::UnexpectedStatus {
                    status: 404,
                    message: format!("Device {} not found", serial),
                }
                .into()
            })
    }
}

// ============================================================================
// AdminApi Implementation
// ============================================================================

#[async_trait]
impl AdminApi for MockMerakiClient {
    async fn create_admin(&self, org_id: &OrganizationId, request: &AdminRequest) -> Result<Value> {
        self.capture_request("create_admin", Some(org_id), None, Some(request))
            .await;
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.create_admin += 1;
        drop(counts);

        Ok(self.admin_payload().await)
    }

    async fn update_admin(
        &self,
        org_id: &OrganizationId,
        admin_id: &str,
        request: &AdminRequest,
    ) -> Result<Value> {
        self.capture_request("update_admin", Some(org_id), Some(admin_id), Some(request))
            .await;
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.update_admin += 1;
        drop(counts);

        Ok(self.admin_payload().await)
    }

    async fn delete_admin(&self, org_id: &OrganizationId, admin_id: &str) -> Result<Value> {
        self.capture_request("delete_admin", Some(org_id), Some(admin_id), None)
            .await;
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.delete_admin += 1;

        Ok(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_configured_orgs() {
        let mock = MockMerakiClient::new()
            .with_orgs(vec![Organization::new(1u64, "Acme")])
            .await;

        let orgs = mock.list_organizations().await.unwrap();
        assert_eq!(orgs.len(), 1);
        assert_eq!(mock.call_counts().await.list_organizations, 1);
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed_once() {
        let mock = MockMerakiClient::new()
            .with_error(ApiError::Network("down".into()))
            .await;

        assert!(mock.list_organizations().await.is_err());
        assert!(mock.list_organizations().await.is_ok());
    }
}
