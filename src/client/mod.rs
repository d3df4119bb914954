//! Meraki Dashboard API client

pub mod api;
pub mod meraki;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod response;

pub use api::{AdminApi, ListingApi};
pub use meraki::{API_BASE_URL, MerakiClient};
#[cfg(test)]
pub use mock::MockMerakiClient;
pub use models::{
    Admin, ConfigTemplate, Device, Network, NetworkAccess, Organization, OrganizationId,
    TagAccess,
};
pub use response::handle_response;

/// Meraki Dashboard API client trait
///
/// Combines [`ListingApi`] and [`AdminApi`]; anything implementing both is a
/// `MerakiApi` through the blanket impl.
pub trait MerakiApi: ListingApi + AdminApi {}

impl<T: ListingApi + AdminApi> MerakiApi for T {}
