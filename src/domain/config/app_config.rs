//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::review::DEFAULT_ROSTER;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 3000;

/// Default Gemini model
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-pro-latest";

/// Default directory served for `GET /*`
pub const DEFAULT_STATIC_DIR: &str = "public";

/// Default submission endpoint base for the wizard
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// Google Cloud collaborators (archive bucket and review sheet).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoogleConfig {
    pub audio_bucket: Option<String>,
    pub sheets_id: Option<String>,
    /// OAuth bearer token used for Storage and Sheets calls
    pub access_token: Option<String>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub port: Option<u16>,
    pub static_dir: Option<String>,
    pub gemini_api_key: Option<String>,
    pub gemini_model: Option<String>,
    pub transcode: Option<bool>,
    pub server_url: Option<String>,
    pub employees: Option<Vec<String>>,
    pub google: Option<GoogleConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            port: Some(DEFAULT_PORT),
            static_dir: Some(DEFAULT_STATIC_DIR.to_string()),
            gemini_api_key: None,
            gemini_model: Some(DEFAULT_GEMINI_MODEL.to_string()),
            transcode: Some(false),
            server_url: Some(DEFAULT_SERVER_URL.to_string()),
            employees: Some(DEFAULT_ROSTER.iter().map(|s| s.to_string()).collect()),
            google: Some(GoogleConfig::default()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            port: other.port.or(self.port),
            static_dir: other.static_dir.or(self.static_dir),
            gemini_api_key: other.gemini_api_key.or(self.gemini_api_key),
            gemini_model: other.gemini_model.or(self.gemini_model),
            transcode: other.transcode.or(self.transcode),
            server_url: other.server_url.or(self.server_url),
            employees: other.employees.or(self.employees),
            google: Self::merge_google_config(self.google, other.google),
        }
    }

    /// Merge Google config sections
    fn merge_google_config(
        base: Option<GoogleConfig>,
        other: Option<GoogleConfig>,
    ) -> Option<GoogleConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(GoogleConfig {
                audio_bucket: o.audio_bucket.or(b.audio_bucket),
                sheets_id: o.sheets_id.or(b.sheets_id),
                access_token: o.access_token.or(b.access_token),
            }),
        }
    }

    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn static_dir_or_default(&self) -> &str {
        self.static_dir.as_deref().unwrap_or(DEFAULT_STATIC_DIR)
    }

    pub fn gemini_model_or_default(&self) -> &str {
        self.gemini_model.as_deref().unwrap_or(DEFAULT_GEMINI_MODEL)
    }

    pub fn transcode_or_default(&self) -> bool {
        self.transcode.unwrap_or(false)
    }

    pub fn server_url_or_default(&self) -> &str {
        self.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    /// Configured roster, or the built-in one when unset or empty
    pub fn employees_or_default(&self) -> Vec<String> {
        match &self.employees {
            Some(list) if !list.is_empty() => list.clone(),
            _ => DEFAULT_ROSTER.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Non-empty Gemini API key, if configured
    pub fn gemini_api_key(&self) -> Option<&str> {
        self.gemini_api_key.as_deref().filter(|k| !k.is_empty())
    }

    pub fn audio_bucket(&self) -> Option<&str> {
        self.google_field(|g| g.audio_bucket.as_deref())
    }

    pub fn sheets_id(&self) -> Option<&str> {
        self.google_field(|g| g.sheets_id.as_deref())
    }

    pub fn google_access_token(&self) -> Option<&str> {
        self.google_field(|g| g.access_token.as_deref())
    }

    fn google_field<'a>(&'a self, pick: impl Fn(&'a GoogleConfig) -> Option<&'a str>) -> Option<&'a str> {
        self.google.as_ref().and_then(pick).filter(|v| !v.is_empty())
    }
}
