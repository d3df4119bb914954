//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use merakiop::{Config, Result};

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "merakiop Configuration Status".bold());

    let config = match Config::load_at(opts.config_ref()) {
        Ok(config) => config,
        Err(_) => {
            println!("{} Configuration not found", "✗".red());
            println!();
            println!(
                "Run {} to create a configuration file.",
                "merakiop init".cyan()
            );
            println!();
            return Ok(());
        }
    };

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!("Config file: {}", config_path.display().to_string().cyan());
    println!();

    if config.api_key.is_some() {
        println!("{} API key configured", "✓".green());
    } else {
        println!("{} API key not configured", "✗".red());
        println!("  → Run 'merakiop init' to configure");
    }

    match opts.org_ref().or(config.org.as_deref()) {
        Some(org) => println!("{} Default organization: {}", "✓".green(), org),
        None => {
            println!("{} No default organization set", "○".dimmed());
            println!("  → Run 'merakiop org set <ORG>' to set one");
        }
    }

    match &config.snmp {
        Some(snmp) => println!(
            "{} SNMP user: {} ({}/{})",
            "✓".green(),
            snmp.user,
            snmp.auth_protocol,
            snmp.priv_protocol
        ),
        None => println!("{} SNMP credentials not configured", "○".dimmed()),
    }

    if let Some(url) = opts.api_base_url.as_ref().or(config.api_base_url.as_ref()) {
        println!("{} Custom API base URL: {}", "○".dimmed(), url.cyan());
    }

    println!();
    Ok(())
}
