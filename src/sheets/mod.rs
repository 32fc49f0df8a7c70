mod client;

pub use client::SheetsClient;

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait SheetOperations {
    /// Ensure a tab with this title exists, creating it with the header row
    /// when absent.
    async fn ensure_tab(&self, title: &str) -> Result<()>;

    /// Append one row below the tab's existing content.
    async fn append_row(&self, title: &str, row: Vec<Value>) -> Result<()>;
}
