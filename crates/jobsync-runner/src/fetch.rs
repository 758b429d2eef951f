//! Source fetcher: one GET against the RapidAPI job-search endpoint with a
//! fixed query, normalized into `JobRecord`s.

use serde_json::Value;
use tracing::{debug, warn};

use jobsync_core::{JobRecord, Result, SyncConfig, SyncError};

const API_HOST: &str = "linkedin-data-api.p.rapidapi.com";
const SEARCH_URL: &str = "https://linkedin-data-api.p.rapidapi.com/search-jobs";

// Fixed search: intern-level software roles in the US posted in the last day.
// Not runtime-configurable; the whole run is parameterless by design.
const KEYWORDS: &str = "software engineer intern";
const LOCATION_ID: &str = "103644278"; // United States geo id
const DATE_POSTED: &str = "past24Hours";
const TITLE_IDS: &str = "9";
const SORT: &str = "mostRelevant";
const PAGE: &str = "1";

/// Fetch the current listings. Any non-2xx status is fatal, no retry.
pub async fn fetch_jobs(client: &reqwest::Client, config: &SyncConfig) -> Result<Vec<JobRecord>> {
    debug!(keywords = KEYWORDS, "querying job-search API");

    let resp = client
        .get(SEARCH_URL)
        .header("x-rapidapi-key", &config.rapidapi_key)
        .header("x-rapidapi-host", API_HOST)
        .query(&[
            ("keywords", KEYWORDS),
            ("locationId", LOCATION_ID),
            ("datePosted", DATE_POSTED),
            ("titleIds", TITLE_IDS),
            ("sort", SORT),
            ("page", PAGE),
        ])
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let message = resp.text().await.unwrap_or_default();
        warn!(status, body = %message, "job-search API error");
        return Err(SyncError::Api { status, message });
    }

    let envelope: Value = resp
        .json()
        .await
        .map_err(|e| SyncError::Parse(e.to_string()))?;

    Ok(extract_jobs(&envelope))
}

/// Normalize the response envelope. A missing or malformed array field
/// yields an empty vec, not an error.
///
/// The array lives at `data` directly or nested one level (`data.data`),
/// depending on which upstream wrapper answered.
pub fn extract_jobs(envelope: &Value) -> Vec<JobRecord> {
    let entries = match envelope.get("data") {
        Some(Value::Array(entries)) => entries.as_slice(),
        Some(inner) => match inner.get("data") {
            Some(Value::Array(entries)) => entries.as_slice(),
            _ => &[],
        },
        None => &[],
    };

    entries.iter().map(JobRecord::from_raw).collect()
}
