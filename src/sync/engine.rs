use crate::error::Result;
use crate::models::{ChannelRecord, StatsSnapshot};
use crate::sheets::SheetOperations;
use crate::youtube::YouTubeOperations;
use chrono::{NaiveDate, Utc};
use indicatif::ProgressStyle;
use tracing::{Span, info, instrument, warn};
use tracing_indicatif::span_ext::IndicatifSpanExt;

pub struct SyncEngine<YT, SC> {
    youtube_client: YT,
    sheets_client: SC,
}

impl<YT, SC> SyncEngine<YT, SC>
where
    YT: YouTubeOperations + Sync,
    SC: SheetOperations + Sync,
{
    pub fn new(youtube_client: YT, sheets_client: SC) -> Self {
        Self {
            youtube_client,
            sheets_client,
        }
    }

    /// Append one dated statistics row per channel, in roster order.
    ///
    /// A channel that fails is logged and skipped; it never aborts the rest
    /// of the run. The next scheduled run is the only retry mechanism.
    #[instrument(name = "Sync", skip_all)]
    pub async fn sync(&self, channels: &[ChannelRecord]) -> Result<()> {
        let span = Span::current();
        span.pb_set_style(
            &ProgressStyle::with_template(
                "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}",
            )
            .map_err(|e| crate::error::AppError::Other(e.into()))?,
        );
        span.pb_set_message("Syncing channels");
        span.pb_set_length(channels.len() as u64);

        // One date stamp for the whole run
        let today = Utc::now().date_naive();

        for channel in channels {
            if let Err(e) = self.sync_channel(channel, today).await {
                warn!(channel = %channel.name, error = %e, "Channel sync failed, continuing");
            }
            span.pb_inc(1);
        }

        info!("All channels processed");

        Ok(())
    }

    #[instrument(name = "Syncing channel", skip_all, fields(channel = %channel.name))]
    async fn sync_channel(&self, channel: &ChannelRecord, today: NaiveDate) -> Result<()> {
        self.sheets_client.ensure_tab(&channel.member_id).await?;

        let Some(stats) = self
            .youtube_client
            .channel_statistics(&channel.youtube_id)
            .await?
        else {
            info!(
                channel = %channel.name,
                youtube_id = %channel.youtube_id,
                "Channel not found, skipping"
            );
            return Ok(());
        };

        let snapshot = StatsSnapshot::from_statistics(today, &stats)?;

        info!(
            channel = %channel.name,
            member_id = %channel.member_id,
            subscribers = snapshot.subscribers,
            "Fetched statistics"
        );

        self.sheets_client
            .append_row(&channel.member_id, snapshot.to_row())
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod mocks {
    use super::*;
    use crate::error::AppError;
    use crate::sheets::SheetOperations;
    use crate::youtube::types::ChannelStatistics;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    pub(crate) enum StatsReply {
        Found(ChannelStatistics),
        NotFound,
        Fail,
    }

    pub(crate) struct MockYouTubeClient {
        pub replies: HashMap<String, StatsReply>,
    }

    #[async_trait]
    impl YouTubeOperations for MockYouTubeClient {
        async fn channel_statistics(&self, channel_id: &str) -> Result<Option<ChannelStatistics>> {
            match self.replies.get(channel_id) {
                Some(StatsReply::Found(stats)) => Ok(Some(stats.clone())),
                Some(StatsReply::NotFound) | None => Ok(None),
                Some(StatsReply::Fail) => Err(AppError::YouTube("mock failure".to_string())),
            }
        }
    }

    #[derive(Clone, Default)]
    pub(crate) struct MockSheetsClient {
        pub tabs: Arc<Mutex<HashMap<String, Vec<Vec<Value>>>>>,
        pub fail_appends_to: Option<String>,
    }

    #[async_trait]
    impl SheetOperations for MockSheetsClient {
        async fn ensure_tab(&self, title: &str) -> Result<()> {
            let mut tabs = self.tabs.lock().unwrap();
            tabs.entry(title.to_string())
                .or_insert_with(|| vec![StatsSnapshot::header_row()]);
            Ok(())
        }

        async fn append_row(&self, title: &str, row: Vec<Value>) -> Result<()> {
            if self.fail_appends_to.as_deref() == Some(title) {
                return Err(AppError::Sheets("mock append failure".to_string()));
            }

            let mut tabs = self.tabs.lock().unwrap();
            tabs.get_mut(title)
                .ok_or_else(|| AppError::Sheets(format!("No such sheet: {}", title)))?
                .push(row);
            Ok(())
        }
    }

    pub(crate) fn found(subscribers: &str, videos: &str, views: &str) -> StatsReply {
        StatsReply::Found(ChannelStatistics {
            subscriber_count: subscribers.to_string(),
            video_count: videos.to_string(),
            view_count: views.to_string(),
        })
    }
}
