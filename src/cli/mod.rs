mod show;
mod sync;

use crate::config::{DEFAULT_ROSTER_PATH, DEFAULT_SPREADSHEET_NAME};
use crate::error::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use show::ShowResource;

#[derive(Parser, Debug)]
#[command(name = "channel-stats-tracker")]
#[command(about = "Log daily YouTube channel statistics to Google Sheets", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Sync(args) => sync::execute(args).await,
            Commands::Show { resource } => resource.execute().await,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append one dated statistics row per roster channel
    Sync(SyncArgs),
    Show {
        #[command(subcommand)]
        resource: ShowResource,
    },
}

#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Path to the roster declarations file
    #[arg(long, default_value = DEFAULT_ROSTER_PATH)]
    pub roster: PathBuf,

    /// Name of the destination spreadsheet in Google Drive
    #[arg(long, default_value = DEFAULT_SPREADSHEET_NAME)]
    pub spreadsheet: String,
}
