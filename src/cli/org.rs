//! Organization command implementations

use colored::Colorize;
use serde_json::json;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::models::OrgDisplay;
use crate::output::{Formattable, json};
use merakiop::{ApiError, Config, DashboardSession, Result};

/// Run the org list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let orgs = ctx.session.list_organizations().await?;

    let selected = ctx.session.organization_id().map(|id| id.as_str());
    let display: Vec<OrgDisplay> = orgs
        .iter()
        .map(|org| OrgDisplay::marked(org, selected))
        .collect();

    display.print(ctx.format)
}

/// Run the org set command
pub async fn set(opts: &GlobalOptions, org: &str) -> Result<()> {
    let mut config = Config::load_at(opts.config_ref())?;
    let api_key = config.validate_auth()?.to_string();
    let base_url = opts
        .api_base_url
        .clone()
        .or_else(|| config.api_base_url.clone());

    println!("Verifying organization...");
    let mut session = DashboardSession::connect_with_base_url(api_key, base_url).await?;
    let scope = session.select_organization(org)?;

    config.org = Some(scope.id.to_string());
    config.save_at(opts.config_ref())?;

    println!(
        "{} Set default organization to: {} ({})",
        "✓".green(),
        scope.name.bold(),
        scope.id
    );

    Ok(())
}

/// Run the org get command
pub async fn get(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let id = ctx.session.require_org()?;
    let name = ctx
        .session
        .organization_name()
        .ok_or(ApiError::OrganizationRequired)?;

    match ctx.format {
        OutputFormat::Table => {
            println!("{}", "Selected Organization".bold());
            println!();
            println!("  ID:   {}", id);
            println!("  Name: {}", name);
        }
        OutputFormat::Json => {
            println!("{}", json::format_json(&json!({"id": id, "name": name}))?);
        }
    }

    Ok(())
}
