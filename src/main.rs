mod commands;

use rust_dvd::cli::{Cli, Commands};
use rust_dvd::config::Config;
use rust_dvd::{logger, Result};
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse_args();

    // Initialize logging system
    logger::init(args.verbose)?;

    debug!("RustDVD CLI starting");

    match run(args).await {
        Ok(_) => {
            info!("Operation completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("Operation failed: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(args: Cli) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    let trace = args.verbose || config.trace_commands;

    match args.command {
        Commands::Info { device, json } => {
            commands::info::execute(config.device_or(device), json, trace).await
        }

        Commands::Start { device, timeout } => {
            let timeout = config.timeout_or(timeout)?;
            commands::spin::execute(config.device_or(device), true, timeout, trace).await
        }

        Commands::Stop { device, timeout } => {
            let timeout = config.timeout_or(timeout)?;
            commands::spin::execute(config.device_or(device), false, timeout, trace).await
        }

        Commands::Command {
            device,
            cdb,
            length,
            timeout,
        } => {
            let timeout = config.timeout_or(timeout)?;
            commands::raw::execute(config.device_or(device), cdb, length, timeout, trace).await
        }

        Commands::Cypher { seed, length } => commands::cypher::execute(seed, length).await,
    }
}
