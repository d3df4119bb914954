//! Administrator grant arguments

use clap::Args;

use merakiop::AdminParams;

/// Access grants shared by `admin add` and `admin update`
#[derive(Debug, Clone, Args)]
pub struct AdminArgs {
    /// Administrator email
    #[arg(long)]
    pub email: String,

    /// Administrator display name
    #[arg(long)]
    pub name: String,

    /// Organization-wide access (full, read-only, none)
    #[arg(long)]
    pub org_access: Option<String>,

    /// Tag to grant access on (repeatable, paired with --tag-access)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Access level for each --tag, in order
    #[arg(long = "tag-access")]
    pub tag_access: Vec<String>,

    /// Network id to grant access on (repeatable, paired with --net-access)
    #[arg(long = "network")]
    pub networks: Vec<String>,

    /// Access level for each --network, in order
    #[arg(long = "net-access")]
    pub net_access: Vec<String>,
}

impl AdminArgs {
    /// Build library params; flags that were not given stay unset
    pub fn to_params(&self) -> AdminParams {
        let mut params = AdminParams::new(self.email.clone(), self.name.clone());

        if let Some(access) = &self.org_access {
            params = params.org_access(access.clone());
        }
        if !self.tags.is_empty() {
            params = params.tags(self.tags.clone());
        }
        if !self.tag_access.is_empty() {
            params = params.tag_access(self.tag_access.clone());
        }
        if !self.networks.is_empty() {
            params = params.networks(self.networks.clone());
        }
        if !self.net_access.is_empty() {
            params = params.net_access(self.net_access.clone());
        }
        params
    }
}
