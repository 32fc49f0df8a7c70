use super::SyncArgs;
use crate::config::Config;
use crate::error::Result;
use crate::roster;
use crate::sheets::SheetsClient;
use crate::sync::SyncEngine;
use crate::youtube::YouTubeClient;
use tracing::{info, warn};

pub(super) async fn execute(args: &SyncArgs) -> Result<()> {
    let config = Config::load(args.roster.clone(), args.spreadsheet.clone())?;

    let channels = roster::load_roster(&config.roster_path);
    if channels.is_empty() {
        warn!(path = %config.roster_path.display(), "No channels found in roster, nothing to do");
        return Ok(());
    }
    info!(count = channels.len(), "Loaded channel roster");

    let youtube_client = YouTubeClient::new(config.credentials.clone()).await?;
    let Some(sheets_client) =
        SheetsClient::open(config.credentials, &config.spreadsheet_name).await?
    else {
        warn!(name = %config.spreadsheet_name, "Spreadsheet not found, nothing to do");
        return Ok(());
    };

    let engine = SyncEngine::new(youtube_client, sheets_client);
    engine.sync(&channels).await?;

    info!("Sync completed");

    Ok(())
}
