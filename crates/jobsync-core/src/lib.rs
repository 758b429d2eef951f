//! `jobsync-core` — shared config, error type, and record shapes for the
//! job-listing → spreadsheet sync.

pub mod config;
pub mod error;
pub mod types;

pub use config::SyncConfig;
pub use error::{Result, SyncError};
pub use types::{AppendOutcome, JobRecord, SyncSummary};
