//! API trait definitions split by responsibility
//!
//! - [`ListingApi`] - Organization, network, device and admin listings
//! - [`AdminApi`] - Administrator create/update/delete
//!
//! The [`MerakiApi`](super::MerakiApi) super-trait combines both.

mod admin;
mod listing;

pub use admin::AdminApi;
pub use listing::ListingApi;
