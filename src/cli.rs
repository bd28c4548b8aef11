use clap::Parser;
use std::path::PathBuf;

/// AVD Wizard - create Android Virtual Devices interactively
#[derive(Parser, Debug)]
#[command(name = "avd-wizard")]
#[command(about = "Interactively create an Android Virtual Device using the SDK command-line tools")]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to the user config directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show what would be installed, created and written, without doing it
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
