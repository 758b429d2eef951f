//! Dedup-append: scan column A for known ids, append only unseen records.
//!
//! The existing-id read fails open: on error the set is treated as empty and
//! every incoming record counts as new. Duplicate rows are preferred over
//! silently dropping listings when the read hiccups.

use std::collections::HashSet;

use tracing::{info, warn};

use jobsync_core::{AppendOutcome, JobRecord, Result};

use crate::client::SheetsClient;
use crate::tabs::ResolvedTab;

/// Collect the dedup keys already present: column A values below the header.
pub fn existing_ids_from_rows(rows: &[Vec<String>]) -> HashSet<String> {
    rows.iter()
        .skip(1) // header row
        .filter_map(|row| row.first())
        .filter(|cell| !cell.is_empty())
        .cloned()
        .collect()
}

/// Keep the records whose id is not already present.
pub fn filter_new(jobs: Vec<JobRecord>, existing: &HashSet<String>) -> Vec<JobRecord> {
    jobs.into_iter()
        .filter(|job| !existing.contains(&job.id))
        .collect()
}

fn to_row(job: &JobRecord) -> Vec<String> {
    [&job.id, &job.title, &job.company, &job.url]
        .into_iter()
        .map(|field| {
            if field.is_empty() {
                "N/A".to_string()
            } else {
                field.clone()
            }
        })
        .collect()
}

/// Read existing ids from the tab, filter the fetched records, and append
/// the survivors in one awaited call.
pub async fn append_new_jobs(
    client: &SheetsClient,
    tab: &ResolvedTab,
    jobs: Vec<JobRecord>,
) -> Result<AppendOutcome> {
    let total = jobs.len();

    let scanned = client.get_values(&format!("{}!A:A", tab.title)).await;
    let rows = match scanned {
        Ok(rows) => rows,
        Err(e) => {
            warn!(code = e.code(), error = %e, "existing-id read failed, treating all jobs as new");
            Vec::new()
        }
    };
    let occupied_rows = rows.len();
    let existing = existing_ids_from_rows(&rows);

    let new_jobs = filter_new(jobs, &existing);
    if new_jobs.is_empty() {
        info!(skipped = total, "no new jobs to append");
        return Ok(AppendOutcome {
            added: 0,
            skipped: total,
        });
    }

    // Grow the grid before the append would run past its fixed capacity.
    let needed = (occupied_rows + new_jobs.len()) as u32;
    if needed > tab.row_count {
        let extra = needed - tab.row_count;
        info!(tab = %tab.title, extra, "growing tab grid before append");
        client.grow_rows(tab.sheet_id, extra).await?;
    }

    let data: Vec<Vec<String>> = new_jobs.iter().map(to_row).collect();
    let reported = client
        .append_values(&format!("{}!A:D", tab.title), &data)
        .await?;
    let added = reconcile_added(new_jobs.len(), reported);

    info!(added, skipped = total - added, tab = %tab.title, "append complete");
    Ok(AppendOutcome {
        added,
        skipped: total - added,
    })
}

/// The outcome counts what we sent; the reply's row count is advisory.
/// `sent` never exceeds the input total, so the skipped subtraction in the
/// caller cannot underflow on an odd reply.
fn reconcile_added(sent: usize, reported: usize) -> usize {
    if reported != sent {
        warn!(sent, reported, "append reply row count disagrees with rows sent");
    }
    sent
}
