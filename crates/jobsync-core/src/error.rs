use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Job API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Sheets API error (status {status}): {message}")]
    Sheets { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SyncError {
    /// Short error code string for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            SyncError::Config(_) => "CONFIG_ERROR",
            SyncError::Auth(_) => "AUTH_FAILED",
            SyncError::Api { .. } => "API_ERROR",
            SyncError::Sheets { .. } => "SHEETS_ERROR",
            SyncError::Parse(_) => "PARSE_ERROR",
            SyncError::Http(_) => "HTTP_ERROR",
            SyncError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
