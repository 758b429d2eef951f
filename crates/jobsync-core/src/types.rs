use serde::Serialize;
use serde_json::Value;

/// One normalized job listing. `id` is the sole dedup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    pub company: String,
    pub url: String,
}

impl JobRecord {
    /// Normalize a raw API entry.
    ///
    /// The id falls back in priority order: explicit `jobId`, generic `id`,
    /// else a synthesized `company-title` key with whitespace collapsed to
    /// hyphens. Missing title/company/url default to the empty string.
    pub fn from_raw(raw: &Value) -> JobRecord {
        let title = string_field(raw, "title").unwrap_or_default();
        // upstream sends both `company: { name }` and flat `companyName`
        let company = raw
            .get("company")
            .and_then(|c| c.get("name"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .or_else(|| string_field(raw, "companyName"))
            .unwrap_or_default();
        let url = string_field(raw, "jobUrl")
            .or_else(|| string_field(raw, "url"))
            .unwrap_or_default();
        let id = string_field(raw, "jobId")
            .or_else(|| string_field(raw, "id"))
            .unwrap_or_else(|| synthesize_id(&company, &title));

        JobRecord {
            id,
            title,
            company,
            url,
        }
    }
}

/// Dedup key for entries without an explicit identifier.
fn synthesize_id(company: &str, title: &str) -> String {
    format!("{company}-{title}")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Read a field as a string, accepting JSON strings and numbers.
fn string_field(raw: &Value, key: &str) -> Option<String> {
    match raw.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// What one append call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendOutcome {
    pub added: usize,
    pub skipped: usize,
}

/// End-of-run report, logged as one JSON line.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SyncSummary {
    /// The fetch returned zero normalized records; nothing was touched.
    NoNewJobs { success: bool, message: String },
    /// Jobs were fetched; reports the dedup-append result (which may be
    /// `jobs_added: 0` when every record was already present).
    #[serde(rename_all = "camelCase")]
    Synced {
        success: bool,
        sheet_name: String,
        jobs_processed: usize,
        jobs_added: usize,
        jobs_skipped: usize,
    },
}

impl SyncSummary {
    pub fn no_new_jobs() -> Self {
        SyncSummary::NoNewJobs {
            success: true,
            message: "No new jobs found".to_string(),
        }
    }

    pub fn synced(sheet_name: String, processed: usize, outcome: AppendOutcome) -> Self {
        SyncSummary::Synced {
            success: true,
            sheet_name,
            jobs_processed: processed,
            jobs_added: outcome.added,
            jobs_skipped: outcome.skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn explicit_job_id_wins() {
        let raw = json!({"jobId": "123", "id": "999", "title": "Intern A"});
        assert_eq!(JobRecord::from_raw(&raw).id, "123");
    }

    #[test]
    fn numeric_job_id_is_stringified() {
        let raw = json!({"jobId": 4211, "title": "Intern A"});
        assert_eq!(JobRecord::from_raw(&raw).id, "4211");
    }

    #[test]
    fn generic_id_used_when_job_id_absent() {
        let raw = json!({"id": "999", "title": "Intern A"});
        assert_eq!(JobRecord::from_raw(&raw).id, "999");
    }

    #[test]
    fn synthesized_id_joins_company_and_title_with_hyphens() {
        let raw = json!({"companyName": "Acme Co", "title": "SWE Intern"});
        assert_eq!(JobRecord::from_raw(&raw).id, "Acme-Co-SWE-Intern");
    }

    #[test]
    fn company_object_form_preferred_over_flat() {
        let raw = json!({
            "jobId": "7",
            "company": {"name": "Foo"},
            "companyName": "Bar"
        });
        assert_eq!(JobRecord::from_raw(&raw).company, "Foo");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let record = JobRecord::from_raw(&json!({"jobId": "1"}));
        assert_eq!(record.title, "");
        assert_eq!(record.company, "");
        assert_eq!(record.url, "");
    }

    #[test]
    fn job_url_preferred_over_url() {
        let raw = json!({"jobId": "1", "jobUrl": "http://a", "url": "http://b"});
        assert_eq!(JobRecord::from_raw(&raw).url, "http://a");
    }

    #[test]
    fn summary_serializes_camel_case() {
        let summary = SyncSummary::synced(
            "2026-08-29".to_string(),
            3,
            AppendOutcome {
                added: 2,
                skipped: 1,
            },
        );
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains(r#""sheetName":"2026-08-29""#));
        assert!(json.contains(r#""jobsProcessed":3"#));
        assert!(json.contains(r#""jobsAdded":2"#));
        assert!(json.contains(r#""jobsSkipped":1"#));
    }

    #[test]
    fn no_new_jobs_summary_message() {
        let json = serde_json::to_string(&SyncSummary::no_new_jobs()).unwrap();
        assert!(json.contains(r#""message":"No new jobs found""#));
    }
}
