//! Configuration template command implementations

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::list::run_list_command;
use crate::models::TemplateDisplay;
use merakiop::{ConfigTemplate, Result};

/// Run the template list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<ConfigTemplate, TemplateDisplay, _>(opts, "config templates", |session| {
        Box::pin(session.list_config_templates())
    })
    .await
}
