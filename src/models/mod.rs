//! Display models for CLI output

pub mod display;

pub use display::{AdminDisplay, DeviceDisplay, NetworkDisplay, OrgDisplay, TemplateDisplay};
