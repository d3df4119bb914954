//! merakiop - Meraki Dashboard API v0 and cloud SNMP client
//!
//! [`DashboardSession`] wraps the REST API with a selected organization;
//! [`MerakiSnmp`] polls `snmp.meraki.com` over SNMPv3; [`MerakiSession`]
//! bundles the two.
//!
//! ```no_run
//! # async fn demo() -> merakiop::Result<()> {
//! use merakiop::{AdminParams, DashboardSession};
//!
//! let mut session = DashboardSession::connect("my-api-key").await?;
//! session.select_organization("Acme Corp")?;
//!
//! for network in session.list_networks().await? {
//!     println!("{} {}", network.id, network.name);
//! }
//!
//! let outcome = session
//!     .add_admin(AdminParams::new("ops@example.com", "Ops").org_access("read-only"))
//!     .await?;
//! assert!(outcome.is_applied());
//! # Ok(())
//! # }
//! ```

pub mod admin;
pub mod client;
pub mod config;
pub mod error;
pub mod facade;
pub mod lookup;
pub mod session;
pub mod snmp;

pub use admin::{AdminOutcome, AdminParams, AdminRequest, AdminRequestError};
pub use client::{
    Admin, ConfigTemplate, Device, MerakiApi, MerakiClient, Network, Organization, OrganizationId,
};
pub use config::{Config, SnmpConfig};
pub use error::{ApiError, ConfigError, Error, Result, SnmpError};
pub use facade::MerakiSession;
pub use lookup::{find_first, find_one_by};
pub use session::{DashboardSession, OrgScope};
pub use snmp::{MerakiSnmp, SnmpBackend, SnmpCredentials, UsmBackend};
