// Verify the read-filter-append contract end to end at the logic layer:
// what lands on the sheet is exactly the records whose ids were unseen.

use std::collections::HashSet;

use jobsync_core::JobRecord;
use jobsync_sheets::tabs::{plan_tab, today_tab_title, TabPlan, HEADER};
use jobsync_sheets::writer::{existing_ids_from_rows, filter_new};

fn record(id: &str, title: &str, company: &str, url: &str) -> JobRecord {
    JobRecord {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        url: url.to_string(),
    }
}

#[test]
fn first_run_appends_then_second_run_skips() {
    let raw = serde_json::json!({
        "jobId": "123",
        "title": "Intern A",
        "company": {"name": "Foo"},
        "jobUrl": "http://x"
    });
    let job = JobRecord::from_raw(&raw);
    assert_eq!(
        job,
        record("123", "Intern A", "Foo", "http://x")
    );

    // first run: tab is empty apart from the header
    let sheet_rows = vec![HEADER.iter().map(|s| s.to_string()).collect::<Vec<_>>()];
    let existing = existing_ids_from_rows(&sheet_rows);
    let new = filter_new(vec![job.clone()], &existing);
    assert_eq!(new.len(), 1);

    // the appended row lands in column A..D (id, title, company, url)
    let appended: Vec<String> = vec![
        new[0].id.clone(),
        new[0].title.clone(),
        new[0].company.clone(),
        new[0].url.clone(),
    ];
    assert_eq!(appended, vec!["123", "Intern A", "Foo", "http://x"]);

    // second run: same fetch, tab now contains the row
    let sheet_rows = vec![
        HEADER.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
        appended,
    ];
    let existing = existing_ids_from_rows(&sheet_rows);
    let new = filter_new(vec![job], &existing);
    assert_eq!(new.len(), 0);
}

#[test]
fn added_count_matches_unseen_ids_exactly() {
    let existing: HashSet<String> = ["a", "b", "c"].map(String::from).into();
    let incoming = vec![
        record("a", "t", "c", "u"),
        record("x", "t", "c", "u"),
        record("b", "t", "c", "u"),
        record("y", "t", "c", "u"),
    ];
    let total = incoming.len();
    let new = filter_new(incoming, &existing);

    let added = new.len();
    assert_eq!(added, 2);
    assert_eq!(total - added, 2);
    assert!(new.iter().all(|j| !existing.contains(&j.id)));
}

#[test]
fn read_failure_degrades_to_everything_new() {
    // a failed existing-id read is represented as an empty set downstream
    let incoming = vec![record("1", "t", "c", "u"), record("2", "t", "c", "u")];
    let total = incoming.len();
    let new = filter_new(incoming, &HashSet::new());
    assert_eq!(new.len(), total);
}

#[test]
fn same_day_resolution_never_replans_a_create() {
    let today = today_tab_title(chrono::Utc::now());
    let after_first_run = vec![today.clone()];
    assert_eq!(plan_tab(&after_first_run, &today), TabPlan::UseExisting);
}
