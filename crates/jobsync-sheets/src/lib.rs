//! `jobsync-sheets` — Google Sheets side of the sync.
//!
//! Auth flow:
//!   1. Parses a service account key (JSON blob from config, not a file).
//!   2. Signs a JWT with RS256 (using `ring`) and exchanges it for an access
//!      token scoped to spreadsheets read/write + drive metadata read.
//!   3. The token lives for the run; nothing is cached across runs.
//!
//! On top of that sits a thin REST client for the Sheets v4 API and the two
//! operations the sync needs: resolving today's destination tab and the
//! dedup-append write.

pub mod auth;
pub mod client;
pub mod tabs;
pub mod writer;

pub use auth::{AccessToken, ServiceAccount};
pub use client::SheetsClient;
pub use tabs::ensure_today_tab;
pub use writer::append_new_jobs;
