mod client;
pub mod types;

pub use client::YouTubeClient;

use crate::error::Result;
use crate::youtube::types::ChannelStatistics;

use async_trait::async_trait;

#[async_trait]
pub trait YouTubeOperations {
    /// Current statistics for a channel, or `None` if the API reports no
    /// matching channel.
    async fn channel_statistics(&self, channel_id: &str) -> Result<Option<ChannelStatistics>>;
}
