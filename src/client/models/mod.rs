//! Meraki Dashboard data models
//!
//! Each model keeps the fields the rest of the crate reads and carries any
//! other keys in an `extra` map, so payloads round-trip to JSON output intact.

mod admin;
mod device;
mod network;
mod org;

pub use admin::{Admin, NetworkAccess, TagAccess};
pub use device::Device;
pub use network::{ConfigTemplate, Network};
pub use org::{Organization, OrganizationId};
