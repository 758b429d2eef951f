//! Orchestrator: authorize, fetch, resolve today's tab, dedup-append.
//!
//! The fetch runs before the tab is resolved, so a run that finds no
//! listings touches the spreadsheet not at all. Fetched jobs then drive
//! the ensure-tab + append sequence against the shared authorized client.

use chrono::Utc;
use tracing::info;

use jobsync_core::{AppendOutcome, JobRecord, Result, SyncConfig, SyncSummary};
use jobsync_sheets::tabs;
use jobsync_sheets::writer::{existing_ids_from_rows, filter_new};
use jobsync_sheets::{append_new_jobs, ensure_today_tab, ServiceAccount, SheetsClient};

use crate::fetch::fetch_jobs;

pub async fn run_sync(config: &SyncConfig, dry_run: bool) -> Result<SyncSummary> {
    let http = reqwest::Client::new();

    let account = ServiceAccount::from_json(&config.google_credentials)?;
    let token = account.authorize(&http).await?;
    let sheets = SheetsClient::new(http.clone(), token.token, config.spreadsheet_id.clone());

    let jobs = fetch_jobs(&http, config).await?;
    info!(fetched = jobs.len(), "job fetch complete");

    if jobs.is_empty() {
        return Ok(SyncSummary::no_new_jobs());
    }

    if dry_run {
        return preview(&sheets, jobs).await;
    }

    let tab = ensure_today_tab(&sheets, Utc::now()).await?;
    let total = jobs.len();
    let outcome = append_new_jobs(&sheets, &tab, jobs).await?;

    Ok(SyncSummary::synced(tab.title, total, outcome))
}

/// Dry-run: same reads, no writes. Reports what an append would have done.
async fn preview(sheets: &SheetsClient, jobs: Vec<JobRecord>) -> Result<SyncSummary> {
    let today = tabs::today_tab_title(Utc::now());
    let existing_tabs = sheets.tab_properties().await?;

    let total = jobs.len();
    let existing = match existing_tabs.iter().find(|t| t.title == today) {
        Some(_) => {
            let rows = sheets.get_values(&format!("{today}!A:A")).await?;
            existing_ids_from_rows(&rows)
        }
        None => {
            info!(tab = %today, "destination tab absent, dry run assumes empty");
            Default::default()
        }
    };

    let would_add = filter_new(jobs, &existing).len();
    info!(would_add, skipped = total - would_add, "dry run, nothing written");

    Ok(SyncSummary::synced(
        today,
        total,
        AppendOutcome {
            added: would_add,
            skipped: total - would_add,
        },
    ))
}
