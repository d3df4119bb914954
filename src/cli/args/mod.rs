//! Shared CLI argument types

mod admin;
mod common;
mod global;

pub use admin::AdminArgs;
pub use common::OutputFormat;
pub use global::GlobalOptions;
