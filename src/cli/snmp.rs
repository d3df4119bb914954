//! SNMP command implementations

use colored::Colorize;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::output::json;
use merakiop::snmp::render_value;
use merakiop::{Config, MerakiSnmp, Result};

fn poller(opts: &GlobalOptions) -> Result<MerakiSnmp> {
    let config = Config::load_at(opts.config_ref())?;
    Ok(MerakiSnmp::new(config.snmp_credentials()?))
}

/// Run the snmp get command
pub async fn get(opts: &GlobalOptions, oid: &str) -> Result<()> {
    let value = poller(opts)?.query(oid).await?.map(|value| render_value(&value));

    match opts.format {
        OutputFormat::Table => match &value {
            Some(value) => println!("{} = {}", oid, value),
            None => println!("{} = {}", oid, "no value".dimmed()),
        },
        OutputFormat::Json => {
            println!("{}", json::format_json(&json!({"oid": oid, "value": value}))?)
        }
    }

    Ok(())
}

/// Run the snmp modem command
pub async fn modem(opts: &GlobalOptions, mac: &str) -> Result<()> {
    let status = poller(opts)?.modem_status(mac).await?;

    match opts.format {
        OutputFormat::Table => println!("{}: {}", mac, status),
        OutputFormat::Json => {
            println!("{}", json::format_json(&json!({"mac": mac, "status": status}))?)
        }
    }

    Ok(())
}
