//! Init command implementation

use colored::Colorize;
use dialoguer::{Confirm, Input, Password, Select, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use merakiop::{Config, DashboardSession, Result, SnmpConfig};

/// Run the init command
///
/// Verifies the API key by fetching the organization list, then optionally
/// records a default organization and SNMP credentials.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let theme = ColorfulTheme::default();

    println!("{}", "Welcome to merakiop!".bold().green());
    println!("Let's set up your Meraki Dashboard configuration.\n");

    let api_key: String = Password::with_theme(&theme)
        .with_prompt("Enter your Meraki Dashboard API key")
        .interact()?;

    println!("\n{}", "Fetching your organizations...".cyan());
    let session =
        DashboardSession::connect_with_base_url(api_key.clone(), opts.api_base_url.clone())
            .await?;
    let orgs = session.organizations();
    println!("{}", "✓ API key accepted".green());

    let org = if orgs.is_empty() {
        println!("{}", "⚠ No organizations found.".yellow());
        None
    } else if orgs.len() == 1 {
        let org = &orgs[0];
        println!("Found organization: {}", org.name.bold());
        let use_org = Confirm::with_theme(&theme)
            .with_prompt("Set this as your default organization?")
            .default(true)
            .interact()?;

        use_org.then(|| org.id.to_string())
    } else {
        let names: Vec<&str> = orgs.iter().map(|o| o.name.as_str()).collect();

        println!("Found {} organizations.", orgs.len());
        let selection = Select::with_theme(&theme)
            .with_prompt("Select your default organization")
            .items(&names)
            .default(0)
            .interact_opt()?;

        selection.map(|idx| orgs[idx].id.to_string())
    };

    let configure_snmp = Confirm::with_theme(&theme)
        .with_prompt("Configure cloud SNMP credentials?")
        .default(false)
        .interact()?;

    let snmp = if configure_snmp {
        let user: String = Input::with_theme(&theme)
            .with_prompt("SNMPv3 user")
            .interact_text()?;
        let auth_password: String = Password::with_theme(&theme)
            .with_prompt("SNMP authentication password")
            .interact()?;
        let priv_password: String = Password::with_theme(&theme)
            .with_prompt("SNMP privacy password")
            .interact()?;
        Some(SnmpConfig::new(user, auth_password, priv_password))
    } else {
        None
    };

    let mut config = Config::load_at(opts.config_ref()).unwrap_or_default();
    config.api_key = Some(api_key);
    config.org = org;
    if opts.api_base_url.is_some() {
        config.api_base_url = opts.api_base_url.clone();
    }
    if snmp.is_some() {
        config.snmp = snmp;
    }
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    if let Some(org) = &config.org {
        println!("  Default organization: {}", org.bold());
    }

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "merakiop status".cyan());
    println!("  {} - List networks", "merakiop network list".cyan());

    Ok(())
}
