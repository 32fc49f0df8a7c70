use super::SheetOperations;
use crate::auth::create_and_verify_authenticator;
use crate::error::{AppError, Result};
use crate::models::StatsSnapshot;
use async_trait::async_trait;
use google_drive3::api::DriveHub;
use google_sheets4::api::{
    AddSheetRequest, BatchUpdateSpreadsheetRequest, GridProperties, Request, Scope,
    SheetProperties, Sheets, ValueRange,
};
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use serde_json::Value;
use tracing::{debug, info, instrument};
use yup_oauth2::ServiceAccountKey;

pub(crate) const AUTH_SCOPE: Scope = Scope::Spreadsheet;

// Capacity of a newly created tab; rows are only ever appended after that.
const TAB_ROWS: i32 = 1000;
const TAB_COLS: i32 = 10;

pub struct SheetsClient {
    hub: Sheets<HttpsConnector<HttpConnector>>,
    spreadsheet_id: String,
}

impl SheetsClient {
    /// Open the named spreadsheet with authenticated access. Returns `None`
    /// when no spreadsheet of that name exists in Drive.
    #[instrument(name = "Authenticating to Google Sheets", skip_all)]
    pub async fn open(
        credentials: ServiceAccountKey,
        spreadsheet_name: &str,
    ) -> Result<Option<Self>> {
        let auth = create_and_verify_authenticator(credentials).await?;

        let connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()
            .unwrap()
            .https_or_http()
            .enable_http1()
            .build();

        let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(connector);

        let sheets_hub = Sheets::new(client.clone(), auth.clone());
        let drive_hub = DriveHub::new(client, auth);

        let Some(spreadsheet_id) =
            Self::search_spreadsheet_by_name(&drive_hub, spreadsheet_name).await?
        else {
            return Ok(None);
        };

        Ok(Some(Self {
            hub: sheets_hub,
            spreadsheet_id,
        }))
    }

    #[instrument(name = "Finding spreadsheet", skip(drive))]
    async fn search_spreadsheet_by_name(
        drive: &DriveHub<HttpsConnector<HttpConnector>>,
        name: &str,
    ) -> Result<Option<String>> {
        let query = format!(
            "name='{}' and mimeType='application/vnd.google-apps.spreadsheet' and trashed=false",
            name
        );

        let (_, file_list) = drive
            .files()
            .list()
            .q(&query)
            .spaces("drive")
            .page_size(1)
            .add_scope(google_drive3::api::Scope::Full)
            .doit()
            .await
            .map_err(|e| AppError::Sheets(format!("Failed to search spreadsheet: {}", e)))?;

        let spreadsheet_id = file_list
            .files
            .and_then(|files| files.into_iter().next())
            .map(|file| file.id.unwrap_or_default());

        Ok(spreadsheet_id)
    }

    async fn has_sheet(&self, title: &str) -> Result<bool> {
        let (_, spreadsheet) = self
            .hub
            .spreadsheets()
            .get(&self.spreadsheet_id)
            .include_grid_data(false)
            .add_scope(AUTH_SCOPE)
            .doit()
            .await
            .map_err(|e| AppError::Sheets(format!("Failed to get spreadsheet: {}", e)))?;

        let found = spreadsheet
            .sheets
            .unwrap_or_default()
            .into_iter()
            .any(|sheet| {
                sheet
                    .properties
                    .as_ref()
                    .map(|props| props.title.as_deref() == Some(title))
                    .unwrap_or(false)
            });

        Ok(found)
    }

    async fn create_sheet(&self, title: &str) -> Result<()> {
        let request = Request {
            add_sheet: Some(AddSheetRequest {
                properties: Some(SheetProperties {
                    title: Some(title.to_string()),
                    sheet_type: Some("GRID".to_string()),
                    grid_properties: Some(GridProperties {
                        row_count: Some(TAB_ROWS),
                        column_count: Some(TAB_COLS),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
            }),
            ..Default::default()
        };

        let batch_update = BatchUpdateSpreadsheetRequest {
            requests: Some(vec![request]),
            ..Default::default()
        };

        self.hub
            .spreadsheets()
            .batch_update(batch_update, &self.spreadsheet_id)
            .add_scope(AUTH_SCOPE)
            .doit()
            .await
            .map_err(|e| AppError::Sheets(format!("Failed to create sheet: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl SheetOperations for SheetsClient {
    #[instrument(name = "Ensuring sheet exists", skip(self))]
    async fn ensure_tab(&self, title: &str) -> Result<()> {
        if self.has_sheet(title).await? {
            debug!(title, "Found existing sheet");
            return Ok(());
        }

        info!(title, "Creating sheet");
        self.create_sheet(title).await?;

        // Header goes in before any data row
        self.append_row(title, StatsSnapshot::header_row()).await?;

        Ok(())
    }

    #[instrument(name = "Appending row", skip(self, row))]
    async fn append_row(&self, title: &str, row: Vec<Value>) -> Result<()> {
        let range = format!("{}!A1", title);
        let value_range = ValueRange {
            major_dimension: Some("ROWS".to_string()),
            range: Some(range.clone()),
            values: Some(vec![row]),
        };

        self.hub
            .spreadsheets()
            .values_append(value_range, &self.spreadsheet_id, &range)
            .value_input_option("USER_ENTERED")
            .insert_data_option("INSERT_ROWS")
            .add_scope(AUTH_SCOPE)
            .doit()
            .await
            .map_err(|e| {
                AppError::Sheets(format!("Failed to append to sheet '{}': {}", title, e))
            })?;

        Ok(())
    }
}
