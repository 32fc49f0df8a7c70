use crate::error::{AppError, Result};
use crate::youtube::types::ChannelStatistics;
use chrono::NaiveDate;
use serde_json::{Value, json};

/// One dated statistics row for a channel.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSnapshot {
    pub date: NaiveDate,
    pub subscribers: u64,
    pub videos: u64,
    pub views: u64,
}

impl StatsSnapshot {
    /// Column layout of every per-channel tab. `to_row` must stay in sync.
    pub const HEADER: [&str; 4] = ["Date", "Subscribers", "Video Count", "View Count"];

    /// Build a snapshot from the API's string-encoded counts. The date is the
    /// run day, computed once per run, not per channel.
    pub fn from_statistics(date: NaiveDate, stats: &ChannelStatistics) -> Result<Self> {
        Ok(Self {
            date,
            subscribers: parse_count("subscriberCount", &stats.subscriber_count)?,
            videos: parse_count("videoCount", &stats.video_count)?,
            views: parse_count("viewCount", &stats.view_count)?,
        })
    }

    /// Counts go out as JSON numbers so the destination stores them as
    /// numerics rather than literal text.
    pub fn to_row(&self) -> Vec<Value> {
        vec![
            json!(self.date.format("%Y-%m-%d").to_string()),
            json!(self.subscribers),
            json!(self.videos),
            json!(self.views),
        ]
    }

    pub fn header_row() -> Vec<Value> {
        Self::HEADER.iter().map(|h| json!(h)).collect()
    }
}

fn parse_count(field: &str, raw: &str) -> Result<u64> {
    raw.parse()
        .map_err(|_| AppError::YouTube(format!("Invalid {}: {:?}", field, raw)))
}
