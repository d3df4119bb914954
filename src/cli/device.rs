//! Device command implementations

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::list::run_list_command;
use crate::cli::{CommandContext, OutputFormat};
use crate::models::DeviceDisplay;
use crate::output::{json, table};
use merakiop::{Device, Result};

/// Run the device list command
pub async fn list(opts: &GlobalOptions, network_id: &str) -> Result<()> {
    let network_id = network_id.to_string();
    run_list_command::<Device, DeviceDisplay, _>(opts, "devices", |session| {
        Box::pin(async move { session.list_devices(&network_id).await })
    })
    .await
}

/// Run the device get command
pub async fn get(opts: &GlobalOptions, network_id: &str, serial: &str) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let device = ctx.session.get_device(network_id, serial).await?;

    match ctx.format {
        OutputFormat::Table => {
            let display = DeviceDisplay::from(device);
            println!("{}", table::format_record(display.fields()));
        }
        OutputFormat::Json => println!("{}", json::format_json(&device)?),
    }

    Ok(())
}
