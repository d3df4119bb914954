//! Network command implementations

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::list::run_list_command;
use crate::models::NetworkDisplay;
use merakiop::{Network, Result};

/// Run the network list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<Network, NetworkDisplay, _>(opts, "networks", |session| {
        Box::pin(session.list_networks())
    })
    .await
}
