//! Thin REST wrapper over the Sheets v4 API. Every call is awaited and
//! checked; a non-2xx status surfaces as `SyncError::Sheets`.

use serde::Deserialize;
use tracing::{debug, warn};

use jobsync_core::{Result, SyncError};

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

pub struct SheetsClient {
    http: reqwest::Client,
    token: String,
    spreadsheet_id: String,
    base_url: String,
}

/// Properties of one tab, as returned by the metadata call.
#[derive(Debug, Clone)]
pub struct TabProperties {
    pub sheet_id: i64,
    pub title: String,
    pub row_count: u32,
}

impl SheetsClient {
    pub fn new(http: reqwest::Client, token: String, spreadsheet_id: String) -> Self {
        Self {
            http,
            token,
            spreadsheet_id,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    fn url(&self, suffix: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}{}",
            self.base_url, self.spreadsheet_id, suffix
        )
    }

    async fn check(&self, resp: reqwest::Response) -> Result<reqwest::Response> {
        if resp.status().is_success() {
            return Ok(resp);
        }
        let status = resp.status().as_u16();
        let message = resp.text().await.unwrap_or_default();
        warn!(status, body = %message, "Sheets API error");
        Err(SyncError::Sheets { status, message })
    }

    /// Fetch every tab's title, sheetId and grid row count.
    pub async fn tab_properties(&self) -> Result<Vec<TabProperties>> {
        let resp = self
            .http
            .get(self.url("?fields=sheets.properties"))
            .bearer_auth(&self.token)
            .send()
            .await?;
        let resp = self.check(resp).await?;

        let meta: SpreadsheetMeta = resp
            .json()
            .await
            .map_err(|e| SyncError::Parse(e.to_string()))?;

        Ok(meta
            .sheets
            .into_iter()
            .map(|s| TabProperties {
                sheet_id: s.properties.sheet_id,
                title: s.properties.title,
                row_count: s.properties.grid_properties.map(|g| g.row_count).unwrap_or(0),
            })
            .collect())
    }

    /// Create a tab with a fixed grid. Returns the created sheetId from the
    /// batchUpdate reply, confirming creation before anything is written.
    pub async fn add_tab(&self, title: &str, rows: u32, cols: u32) -> Result<i64> {
        let body = serde_json::json!({
            "requests": [{
                "addSheet": {
                    "properties": {
                        "title": title,
                        "gridProperties": { "rowCount": rows, "columnCount": cols }
                    }
                }
            }]
        });

        let resp = self
            .http
            .post(self.url(":batchUpdate"))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;
        let resp = self.check(resp).await?;

        let reply: BatchUpdateReply = resp
            .json()
            .await
            .map_err(|e| SyncError::Parse(e.to_string()))?;

        let sheet_id = reply
            .replies
            .into_iter()
            .find_map(|r| r.add_sheet)
            .map(|a| a.properties.sheet_id)
            .ok_or_else(|| SyncError::Parse("addSheet reply missing sheet properties".into()))?;

        debug!(title, sheet_id, "tab created");
        Ok(sheet_id)
    }

    /// Overwrite a range with rows (values.update, RAW input).
    pub async fn update_values(&self, range: &str, rows: &[Vec<String>]) -> Result<()> {
        let resp = self
            .http
            .put(self.url(&format!("/values/{range}?valueInputOption=RAW")))
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "values": rows }))
            .send()
            .await?;
        self.check(resp).await?;
        Ok(())
    }

    /// Read a range as rows of strings (values.get). Empty range → empty vec.
    pub async fn get_values(&self, range: &str) -> Result<Vec<Vec<String>>> {
        let resp = self
            .http
            .get(self.url(&format!("/values/{range}")))
            .bearer_auth(&self.token)
            .send()
            .await?;
        let resp = self.check(resp).await?;

        let range: ValueRange = resp
            .json()
            .await
            .map_err(|e| SyncError::Parse(e.to_string()))?;
        Ok(range.values)
    }

    /// Append rows after the last data row (values.append, INSERT_ROWS).
    pub async fn append_values(&self, range: &str, rows: &[Vec<String>]) -> Result<usize> {
        let resp = self
            .http
            .post(self.url(&format!(
                "/values/{range}:append?valueInputOption=RAW&insertDataOption=INSERT_ROWS"
            )))
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "values": rows }))
            .send()
            .await?;
        let resp = self.check(resp).await?;

        let reply: AppendReply = resp
            .json()
            .await
            .map_err(|e| SyncError::Parse(e.to_string()))?;
        Ok(reply
            .updates
            .map(|u| u.updated_rows as usize)
            .unwrap_or(rows.len()))
    }

    /// Grow a tab's grid by `length` rows (batchUpdate appendDimension).
    pub async fn grow_rows(&self, sheet_id: i64, length: u32) -> Result<()> {
        let body = serde_json::json!({
            "requests": [{
                "appendDimension": {
                    "sheetId": sheet_id,
                    "dimension": "ROWS",
                    "length": length
                }
            }]
        });

        let resp = self
            .http
            .post(self.url(":batchUpdate"))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;
        self.check(resp).await?;
        Ok(())
    }
}

// Sheets API response types (private — deserialization only)

#[derive(Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<Sheet>,
}

#[derive(Deserialize)]
struct Sheet {
    properties: SheetProperties,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SheetProperties {
    sheet_id: i64,
    title: String,
    grid_properties: Option<GridProperties>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GridProperties {
    #[serde(default)]
    row_count: u32,
}

#[derive(Deserialize)]
struct BatchUpdateReply {
    #[serde(default)]
    replies: Vec<BatchReply>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchReply {
    add_sheet: Option<AddSheetReply>,
}

#[derive(Deserialize)]
struct AddSheetReply {
    properties: SheetProperties,
}

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

#[derive(Deserialize)]
struct AppendReply {
    updates: Option<AppendUpdates>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendUpdates {
    #[serde(default)]
    updated_rows: u32,
}
