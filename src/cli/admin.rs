//! Administrator command implementations

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};
use serde_json::Value;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::list::run_list_command;
use crate::cli::{AdminArgs, CommandContext, OutputFormat};
use crate::models::AdminDisplay;
use crate::output::json;
use merakiop::{Admin, AdminOutcome, Result};

/// Run the admin list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<Admin, AdminDisplay, _>(opts, "administrators", |session| {
        Box::pin(session.list_admins())
    })
    .await
}

/// Run the admin add command
pub async fn add(opts: &GlobalOptions, grants: &AdminArgs) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let outcome = ctx.session.add_admin(grants.to_params()).await?;
    report(ctx.format, outcome, "Added")
}

/// Run the admin update command
pub async fn update(opts: &GlobalOptions, admin_id: &str, grants: &AdminArgs) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let outcome = ctx.session.update_admin(admin_id, grants.to_params()).await?;
    report(ctx.format, outcome, "Updated")
}

/// Run the admin delete command
pub async fn delete(opts: &GlobalOptions, admin_id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let org_name = ctx.session.organization_name().unwrap_or("the organization");

    if !yes {
        let confirm = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Revoke administrator {} from {}?", admin_id, org_name))
            .default(false)
            .interact()?;

        if !confirm {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let payload = ctx.session.delete_admin(admin_id).await?;

    match ctx.format {
        OutputFormat::Table => println!("{} Revoked administrator {}", "✓".green(), admin_id),
        OutputFormat::Json => println!("{}", json::format_json(&payload)?),
    }

    Ok(())
}

fn report(format: OutputFormat, outcome: AdminOutcome, verb: &str) -> Result<()> {
    let payload = match outcome {
        AdminOutcome::Applied(payload) => payload,
        AdminOutcome::Rejected(reason) => return Err(reason.into()),
    };

    match format {
        OutputFormat::Json => println!("{}", json::format_json(&payload)?),
        OutputFormat::Table => match api_errors(&payload) {
            Some(errors) => println!("{} {}", "⚠".yellow(), errors),
            None => println!(
                "{} {} administrator {}",
                "✓".green(),
                verb,
                payload["email"].as_str().unwrap_or_default()
            ),
        },
    }

    Ok(())
}

/// The `errors` list of a soft-success payload, joined
fn api_errors(payload: &Value) -> Option<String> {
    let errors = payload.get("errors")?.as_array()?;
    Some(
        errors
            .iter()
            .map(|err| err.as_str().map(str::to_string).unwrap_or_else(|| err.to_string()))
            .collect::<Vec<_>>()
            .join("; "),
    )
}
