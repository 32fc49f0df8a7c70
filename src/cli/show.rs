use crate::config::DEFAULT_ROSTER_PATH;
use crate::error::Result;
use crate::roster;
use clap::Subcommand;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Subcommand, Debug)]
pub enum ShowResource {
    /// Show the channels extracted from the roster file
    Channels {
        /// Path to the roster declarations file
        #[arg(long, default_value = DEFAULT_ROSTER_PATH)]
        roster: PathBuf,
    },
}

impl ShowResource {
    pub async fn execute(&self) -> Result<()> {
        match self {
            ShowResource::Channels { roster } => show_channels(roster),
        }
    }
}

fn show_channels(roster_path: &Path) -> Result<()> {
    let channels = roster::load_roster(roster_path);

    if channels.is_empty() {
        warn!(path = %roster_path.display(), "No channels found in roster");
        return Ok(());
    }

    for channel in &channels {
        info!(
            member_id = %channel.member_id,
            youtube_id = %channel.youtube_id,
            "{}",
            channel.name
        );
    }

    Ok(())
}
