//! Command execution context
//!
//! Loads the config, connects a [`DashboardSession`] and applies the
//! organization selection so handlers start from a ready session.

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use merakiop::{Config, DashboardSession, Result};

/// Connected session and output preference for one command
pub struct CommandContext {
    pub session: DashboardSession,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load config, connect, and select `--org` or the configured default.
    ///
    /// Fails when the config is missing, has no API key, the organization
    /// list cannot be fetched, or the requested organization is not visible.
    pub async fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let api_key = config.validate_auth()?.to_string();

        let base_url = opts
            .api_base_url
            .clone()
            .or_else(|| config.api_base_url.clone());

        let mut session = DashboardSession::connect_with_base_url(api_key, base_url).await?;

        if let Some(org) = opts.org_ref().or(config.org.as_deref()) {
            let scope = session.select_organization(org)?;
            debug!("Scoped to organization {} ({})", scope.name, scope.id);
        }

        Ok(Self {
            session,
            format: opts.format,
        })
    }
}
