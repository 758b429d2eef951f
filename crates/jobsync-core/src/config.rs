use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Everything a run needs, resolved once at process start and passed by
/// reference into each component. Components never read the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Serialized Google service-account key JSON (`client_email` + `private_key`).
    #[serde(default)]
    pub google_credentials: String,
    /// RapidAPI key for the job-search endpoint.
    #[serde(default)]
    pub rapidapi_key: String,
    /// Destination spreadsheet identifier.
    #[serde(default)]
    pub spreadsheet_id: String,
}

impl SyncConfig {
    /// Load config from an optional TOML file with env var overrides
    /// (`GOOGLE_CREDENTIALS`, `RAPIDAPI_KEY`, `SPREADSHEET_ID`).
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let mut figment = Figment::new();
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }
        let config: SyncConfig = figment
            .merge(Env::raw().only(&["google_credentials", "rapidapi_key", "spreadsheet_id"]))
            .extract()
            .map_err(|e| crate::error::SyncError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Fail fast on missing values instead of erroring at first use.
    pub fn validate(&self) -> crate::error::Result<()> {
        for (key, value) in [
            ("GOOGLE_CREDENTIALS", &self.google_credentials),
            ("RAPIDAPI_KEY", &self.rapidapi_key),
            ("SPREADSHEET_ID", &self.spreadsheet_id),
        ] {
            if value.trim().is_empty() {
                return Err(crate::error::SyncError::Config(format!(
                    "{key} is not set"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_missing_key() {
        let config = SyncConfig {
            google_credentials: "{}".to_string(),
            rapidapi_key: String::new(),
            spreadsheet_id: "sheet-1".to_string(),
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("RAPIDAPI_KEY"));
    }

    #[test]
    fn validate_accepts_complete_config() {
        let config = SyncConfig {
            google_credentials: "{}".to_string(),
            rapidapi_key: "key".to_string(),
            spreadsheet_id: "sheet-1".to_string(),
        };
        assert!(config.validate().is_ok());
    }
}
