//! Destination-tab resolution: one tab per UTC calendar day, created with a
//! fixed header row when absent.

use chrono::{DateTime, Utc};
use tracing::info;

use jobsync_core::Result;

use crate::client::{SheetsClient, TabProperties};

pub const TAB_ROWS: u32 = 1000;
pub const TAB_COLS: u32 = 4;
pub const HEADER: [&str; 4] = ["JobId", "Title", "Company", "Url"];

/// The run's append target.
#[derive(Debug, Clone)]
pub struct ResolvedTab {
    pub title: String,
    pub sheet_id: i64,
    pub row_count: u32,
}

/// Tab title for a given instant: the UTC date component only.
pub fn today_tab_title(now: DateTime<Utc>) -> String {
    now.date_naive().format("%Y-%m-%d").to_string()
}

/// What `ensure_today_tab` will do, decided from the current tab list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabPlan {
    /// Today's tab already exists; no mutation.
    UseExisting,
    /// Create the tab and write the header row.
    Create,
}

pub fn plan_tab(existing_titles: &[String], today: &str) -> TabPlan {
    if existing_titles.iter().any(|t| t == today) {
        TabPlan::UseExisting
    } else {
        TabPlan::Create
    }
}

/// Resolve today's tab, creating it (grid + header row) when missing.
///
/// Both mutating calls are awaited: the batchUpdate reply confirms the tab
/// exists before the header write, and the tab is returned only after the
/// header landed. Repeat calls on the same day take the read-only branch.
pub async fn ensure_today_tab(client: &SheetsClient, now: DateTime<Utc>) -> Result<ResolvedTab> {
    let today = today_tab_title(now);
    let tabs = client.tab_properties().await?;

    if let Some(tab) = tabs.iter().find(|t| t.title == today) {
        info!(tab = %today, "destination tab already exists");
        return Ok(resolved(tab));
    }

    info!(tab = %today, "creating destination tab");
    let sheet_id = client.add_tab(&today, TAB_ROWS, TAB_COLS).await?;

    let header: Vec<String> = HEADER.iter().map(|s| s.to_string()).collect();
    client
        .update_values(&format!("{today}!A1:D1"), &[header])
        .await?;

    Ok(ResolvedTab {
        title: today,
        sheet_id,
        row_count: TAB_ROWS,
    })
}

fn resolved(tab: &TabProperties) -> ResolvedTab {
    ResolvedTab {
        title: tab.title.clone(),
        sheet_id: tab.sheet_id,
        row_count: tab.row_count,
    }
}
