//! One session over both the Dashboard API and cloud SNMP

use crate::client::{MerakiApi, MerakiClient};
use crate::error::Result;
use crate::session::{DashboardSession, OrgScope};
use crate::snmp::{MerakiSnmp, SnmpBackend, SnmpCredentials, UsmBackend};

/// Dashboard session plus SNMP poller
#[derive(Debug)]
pub struct MerakiSession<A = MerakiClient, B = UsmBackend> {
    dashboard: DashboardSession<A>,
    snmp: MerakiSnmp<B>,
}

impl MerakiSession<MerakiClient, UsmBackend> {
    /// Connect to the Dashboard (fetching the organization list) and set up
    /// the SNMP poller. Fails if the organization fetch fails.
    pub async fn connect(api_key: impl Into<String>, snmp: SnmpCredentials) -> Result<Self> {
        Self::connect_with_base_url(api_key, None, snmp).await
    }

    pub async fn connect_with_base_url(
        api_key: impl Into<String>,
        base_url: Option<String>,
        snmp: SnmpCredentials,
    ) -> Result<Self> {
        let dashboard = DashboardSession::connect_with_base_url(api_key, base_url).await?;
        Ok(Self::from_parts(dashboard, MerakiSnmp::new(snmp)))
    }
}

impl<A: MerakiApi, B: SnmpBackend> MerakiSession<A, B> {
    pub fn from_parts(dashboard: DashboardSession<A>, snmp: MerakiSnmp<B>) -> Self {
        Self { dashboard, snmp }
    }

    pub fn dashboard(&self) -> &DashboardSession<A> {
        &self.dashboard
    }

    pub fn dashboard_mut(&mut self) -> &mut DashboardSession<A> {
        &mut self.dashboard
    }

    pub fn snmp(&self) -> &MerakiSnmp<B> {
        &self.snmp
    }

    /// Select the organization used by scoped Dashboard calls
    pub fn select_organization(&mut self, identifier: impl std::fmt::Display) -> Result<&OrgScope> {
        self.dashboard.select_organization(identifier)
    }

    /// LTE modem status for a device MAC via SNMP
    pub async fn modem_status(&self, mac: &str) -> Result<String> {
        self.snmp.modem_status(mac).await
    }
}
