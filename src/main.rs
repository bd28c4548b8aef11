//! AVD Wizard - command line entry point
//!
//! Sets up logging, runs the wizard and maps failures to exit code 1.

mod cli;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use avd_wizard::commands::{failure_message, WizardCommand};
use avd_wizard::wizard_core::{APP_NAME, VERSION};

use crate::cli::Cli;

/// Initialize logging on stderr so prompts on stdout stay readable
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    info!("{} v{} starting...", APP_NAME, VERSION);

    let command = WizardCommand {
        settings_path: cli.config,
        dry_run: cli.dry_run,
    };

    if let Err(err) = command.execute().await {
        debug!("Wizard failed: {:?}", err);
        eprintln!("{}", failure_message(&err));
        std::process::exit(1);
    }
}
