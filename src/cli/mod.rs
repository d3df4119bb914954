//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod admin;
pub mod args;
pub mod completions;
pub mod context;
pub mod device;
pub mod handlers;
pub mod init;
pub mod network;
pub mod org;
pub mod snmp;
pub mod status;
pub mod template;

pub use args::{AdminArgs, OutputFormat};
pub use context::CommandContext;

/// merakiop - Meraki Dashboard and cloud SNMP from the command line
#[derive(Parser, Debug)]
#[command(name = "merakiop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "MERAKIOP_FORMAT",
        default_value = "table",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Organization name or id (overrides the configured default)
    #[arg(long, global = true, env = "MERAKIOP_ORG", hide_env = true)]
    pub org: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "MERAKIOP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Dashboard API base URL
    #[arg(long, global = true, env = "MERAKIOP_API_BASE_URL", hide = true)]
    pub api_base_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "MERAKIOP_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize merakiop configuration
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// List and select organizations
    #[command(subcommand)]
    Org(OrgCommands),

    /// List networks in the selected organization
    #[command(subcommand)]
    Network(NetworkCommands),

    /// List and inspect devices in a network
    #[command(subcommand)]
    Device(DeviceCommands),

    /// List configuration templates
    #[command(subcommand)]
    Template(TemplateCommands),

    /// Manage organization administrators
    #[command(subcommand)]
    Admin(AdminCommands),

    /// Poll the Meraki cloud SNMP endpoint
    #[command(subcommand)]
    Snmp(SnmpCommands),

    /// Generate shell completions
    #[command(after_help = "EXAMPLES:\n  \
            merakiop completion bash > ~/.local/share/bash-completion/completions/merakiop\n  \
            merakiop completion zsh > ~/.zfunc/_merakiop")]
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum OrgCommands {
    /// List all accessible organizations
    List,

    /// Set the default organization
    Set {
        /// Organization name or id
        org: String,
    },

    /// Show the selected organization
    Get,
}

#[derive(Subcommand, Debug)]
pub enum NetworkCommands {
    /// List networks
    List,
}

#[derive(Subcommand, Debug)]
pub enum DeviceCommands {
    /// List devices in a network
    List {
        /// Network id
        network: String,
    },

    /// Show one device
    Get {
        /// Network id
        network: String,
        /// Device serial
        serial: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    /// List configuration templates
    List,
}

#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// List administrators
    List,

    /// Add an administrator
    #[command(after_help = "EXAMPLES:\n  \
            merakiop admin add --email ops@example.com --name Ops --org-access read-only\n  \
            merakiop admin add --email a@example.com --name A --tag west --tag-access full")]
    Add(AdminArgs),

    /// Update an administrator
    Update {
        /// Administrator id
        admin_id: String,

        #[command(flatten)]
        grants: AdminArgs,
    },

    /// Revoke an administrator
    Delete {
        /// Administrator id
        admin_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SnmpCommands {
    /// GET a single OID
    Get {
        /// Dotted OID (e.g. 1.3.6.1.2.1.1.5.0)
        oid: String,
    },

    /// LTE modem status for a device
    Modem {
        /// Device MAC address (aa:bb:cc:dd:ee:ff)
        mac: String,
    },
}
