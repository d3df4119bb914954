//! Meraki Dashboard API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as HttpClient, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::models::{Admin, ConfigTemplate, Device, Network, Organization, OrganizationId};
use super::response::handle_response;
use super::{AdminApi, ListingApi};
use crate::admin::AdminRequest;
use crate::error::{ApiError, Result};

/// Meraki Dashboard API base URL
pub const API_BASE_URL: &str = "https://dashboard.meraki.com/api/v0";

/// Header carrying the Dashboard API key
pub const API_KEY_HEADER: &str = "x-cisco-meraki-api-key";

/// Meraki Dashboard API client
///
/// Every request carries the API key and a JSON content type and goes
/// through [`handle_response`]. There is no retry and no pagination.
#[derive(Debug, Clone)]
pub struct MerakiClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
}

impl MerakiClient {
    /// Create a client against the production Dashboard
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, None)
    }

    /// Create a client with an optional base URL override.
    ///
    /// The override is used for testing and for dashboard shards; a trailing
    /// slash is dropped so paths can always start with `/`.
    pub fn with_base_url(api_key: impl Into<String>, base_url: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let base_url = base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| API_BASE_URL.to_string());

        Ok(Self {
            http,
            base_url,
            api_key: api_key.into(),
        })
    }

    /// The base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and return the validated JSON payload
    pub async fn get(&self, path: &str) -> Result<Value> {
        self.send(Method::GET, path, None).await
    }

    /// POST `body` as JSON to `path` and return the validated payload
    pub async fn post<B: Serialize + ?Sized + Sync>(&self, path: &str, body: &B) -> Result<Value> {
        let body = serde_json::to_string(body)?;
        self.send(Method::POST, path, Some(body)).await
    }

    /// DELETE `path` and return the validated payload
    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.send(Method::DELETE, path, None).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.http
            .request(method, url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
    }

    async fn send(&self, method: Method, path: &str, body: Option<String>) -> Result<Value> {
        let mut request = self.request(method.clone(), path);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(ApiError::from)?;

        log::debug!("{} {} -> {}", method, path, status);

        handle_response(status, &text)
    }

    async fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let payload = self.get(path).await?;
        Ok(serde_json::from_value(payload)?)
    }
}

#[async_trait]
impl ListingApi for MerakiClient {
    async fn list_organizations(&self) -> Result<Vec<Organization>> {
        self.get_as("/organizations").await
    }

    async fn list_config_templates(&self, org_id: &OrganizationId) -> Result<Vec<ConfigTemplate>> {
        self.get_as(&format!("/organizations/{}/configTemplates", org_id))
            .await
    }

    async fn list_networks(&self, org_id: &OrganizationId) -> Result<Vec<Network>> {
        self.get_as(&format!("/organizations/{}/networks", org_id))
            .await
    }

    async fn list_admins(&self, org_id: &OrganizationId) -> Result<Vec<Admin>> {
        self.get_as(&format!("/organizations/{}/admins", org_id))
            .await
    }

    async fn list_devices(&self, network_id: &str) -> Result<Vec<Device>> {
        self.get_as(&format!("/networks/{}/devices", network_id))
            .await
    }

    async fn get_device(&self, network_id: &str, serial: &str) -> Result<Device> {
        self.get_as(&format!("/networks/{}/devices/{}", network_id, serial))
            .await
    }
}

#[async_trait]
impl AdminApi for MerakiClient {
    async fn create_admin(&self, org_id: &OrganizationId, request: &AdminRequest) -> Result<Value> {
        self.post(&format!("/organizations/{}/admins", org_id), request)
            .await
    }

    async fn update_admin(
        &self,
        org_id: &OrganizationId,
        admin_id: &str,
        request: &AdminRequest,
    ) -> Result<Value> {
        self.post(
            &format!("/organizations/{}/admins/{}", org_id, admin_id),
            request,
        )
        .await
    }

    async fn delete_admin(&self, org_id: &OrganizationId, admin_id: &str) -> Result<Value> {
        self.delete(&format!("/organizations/{}/admins/{}", org_id, admin_id))
            .await
    }
}
