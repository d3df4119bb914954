//! Generic list command handler
//!
//! Every list command follows the same flow: build the context, fetch from
//! the session, convert to a display type, print.

use std::future::Future;

use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::output::Formattable;
use merakiop::{DashboardSession, Result};

/// Run a list command with the fetch → display → print pattern.
///
/// ```ignore
/// run_list_command::<Network, NetworkDisplay, _>(opts, "networks", |session| {
///     session.list_networks()
/// })
/// .await
/// ```
pub async fn run_list_command<T, D, F>(
    opts: &GlobalOptions,
    resource_name: &str,
    fetcher: F,
) -> Result<()>
where
    D: From<T> + Tabled + Serialize,
    F: for<'a> FnOnce(&'a DashboardSession) -> ListFuture<'a, T>,
{
    let ctx = CommandContext::new(opts).await?;

    debug!("Fetching {}", resource_name);
    let items = fetcher(&ctx.session).await?;
    debug!("Fetched {} {}", items.len(), resource_name);

    let display_items: Vec<D> = items.into_iter().map(D::from).collect();
    display_items.print(ctx.format)
}

/// Boxed future returned by a list fetcher
pub type ListFuture<'a, T> =
    std::pin::Pin<Box<dyn Future<Output = Result<Vec<T>>> + 'a>>;
