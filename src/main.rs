//! merakiop CLI - Meraki Dashboard and cloud SNMP from the command line

use clap::Parser;
use log::LevelFilter;

mod cli;
mod models;
mod output;

use cli::args::GlobalOptions;
use cli::{
    AdminCommands, Cli, Commands, DeviceCommands, NetworkCommands, OrgCommands, SnmpCommands,
    TemplateCommands,
};
use merakiop::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if debug {
        builder.filter_module("merakiop", LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("merakiop version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Org(org_cmd) => match org_cmd {
            OrgCommands::List => cli::org::list(&opts).await,
            OrgCommands::Set { org } => cli::org::set(&opts, &org).await,
            OrgCommands::Get => cli::org::get(&opts).await,
        },
        Commands::Network(NetworkCommands::List) => cli::network::list(&opts).await,
        Commands::Device(device_cmd) => match device_cmd {
            DeviceCommands::List { network } => cli::device::list(&opts, &network).await,
            DeviceCommands::Get { network, serial } => {
                cli::device::get(&opts, &network, &serial).await
            }
        },
        Commands::Template(TemplateCommands::List) => cli::template::list(&opts).await,
        Commands::Admin(admin_cmd) => match admin_cmd {
            AdminCommands::List => cli::admin::list(&opts).await,
            AdminCommands::Add(grants) => cli::admin::add(&opts, &grants).await,
            AdminCommands::Update { admin_id, grants } => {
                cli::admin::update(&opts, &admin_id, &grants).await
            }
            AdminCommands::Delete { admin_id, yes } => {
                cli::admin::delete(&opts, &admin_id, yes).await
            }
        },
        Commands::Snmp(snmp_cmd) => match snmp_cmd {
            SnmpCommands::Get { oid } => cli::snmp::get(&opts, &oid).await,
            SnmpCommands::Modem { mac } => cli::snmp::modem(&opts, &mac).await,
        },
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}
