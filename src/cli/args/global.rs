//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global flags, captured once after parsing.
///
/// Precedence is CLI flag > environment variable > config file > default.
/// This struct holds the flag/env layer; the config file is applied in
/// `CommandContext`.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    pub format: OutputFormat,

    /// Organization name or id (overrides the configured default)
    pub org: Option<String>,

    /// Config file path (defaults to ~/.merakiop/config.yaml)
    pub config: Option<String>,

    /// Dashboard API base URL override
    pub api_base_url: Option<String>,
}

impl GlobalOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            org: cli.org.clone(),
            config: cli.config.clone(),
            api_base_url: cli.api_base_url.clone(),
        }
    }

    pub fn org_ref(&self) -> Option<&str> {
        self.org.as_deref()
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}
