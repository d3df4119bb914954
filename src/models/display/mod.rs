//! Display model implementations for table and JSON output
//!
//! Display models flatten Dashboard payloads into fixed columns.

mod admin;
mod common;
mod device;
mod network;
mod org;

pub use admin::AdminDisplay;
pub use device::DeviceDisplay;
pub use network::{NetworkDisplay, TemplateDisplay};
pub use org::OrgDisplay;
