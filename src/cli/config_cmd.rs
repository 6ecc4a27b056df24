//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, GoogleConfig};
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, SECRET_CONFIG_KEYS, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;

    let mut config = store.load().await?;
    apply_value(&mut config, key, value)?;
    store.save(&config).await?;

    let shown = display_value(key, value);
    presenter.success(&format!("{} = {}", key, shown));
    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;

    let config = store.load().await?;
    match read_value(&config, key) {
        Some(v) => presenter.output(&display_value(key, &v)),
        None => presenter.output(NOT_SET),
    }
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        let value = read_value(&config, key)
            .map(|v| display_value(key, &v))
            .unwrap_or_else(|| NOT_SET.to_string());
        presenter.key_value(key, &value);
    }
    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn ensure_known_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        Ok(())
    } else {
        Err(invalid(
            key,
            format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        ))
    }
}

fn invalid(key: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: message.into(),
    }
}

/// Parse `value` for `key` and store it in `config`
fn apply_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "port" => {
            let port = value
                .trim()
                .parse::<u16>()
                .map_err(|_| invalid(key, "Value must be a port number (1-65535)"))?;
            if port == 0 {
                return Err(invalid(key, "Value must be a port number (1-65535)"));
            }
            config.port = Some(port);
        }
        "static_dir" => config.static_dir = Some(non_empty(key, value)?),
        "gemini_api_key" => config.gemini_api_key = Some(non_empty(key, value)?),
        "gemini_model" => config.gemini_model = Some(non_empty(key, value)?),
        "transcode" => {
            config.transcode = Some(
                parse_bool(value).map_err(|_| invalid(key, "Value must be 'true' or 'false'"))?,
            )
        }
        "server_url" => {
            let url = non_empty(key, value)?;
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(invalid(key, "Value must start with http:// or https://"));
            }
            config.server_url = Some(url.trim_end_matches('/').to_string());
        }
        "employees" => {
            let names = parse_roster(value);
            if names.is_empty() {
                return Err(invalid(key, "Provide at least one comma-separated name"));
            }
            config.employees = Some(names);
        }
        "google.audio_bucket" => google_mut(config).audio_bucket = Some(non_empty(key, value)?),
        "google.sheets_id" => google_mut(config).sheets_id = Some(non_empty(key, value)?),
        "google.access_token" => google_mut(config).access_token = Some(non_empty(key, value)?),
        _ => return Err(invalid(key, "Unknown key")),
    }
    Ok(())
}

/// Raw stored value for `key`, if any
fn read_value(config: &AppConfig, key: &str) -> Option<String> {
    let google = config.google.as_ref();
    match key {
        "port" => config.port.map(|p| p.to_string()),
        "static_dir" => config.static_dir.clone(),
        "gemini_api_key" => config.gemini_api_key.clone(),
        "gemini_model" => config.gemini_model.clone(),
        "transcode" => config.transcode.map(|b| b.to_string()),
        "server_url" => config.server_url.clone(),
        "employees" => config.employees.as_ref().map(|names| names.join(", ")),
        "google.audio_bucket" => google.and_then(|g| g.audio_bucket.clone()),
        "google.sheets_id" => google.and_then(|g| g.sheets_id.clone()),
        "google.access_token" => google.and_then(|g| g.access_token.clone()),
        _ => None,
    }
}

fn google_mut(config: &mut AppConfig) -> &mut GoogleConfig {
    config.google.get_or_insert_with(GoogleConfig::default)
}

fn non_empty(key: &str, value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(invalid(key, "Value must not be empty"))
    } else {
        Ok(trimmed.to_string())
    }
}

fn display_value(key: &str, value: &str) -> String {
    if SECRET_CONFIG_KEYS.contains(&key) {
        mask_secret(value)
    } else {
        value.to_string()
    }
}

/// Split a comma-separated roster, dropping blanks and duplicates
fn parse_roster(value: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in value.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

/// Mask a secret for display (show first 4 and last 4 chars)
fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::XdgConfigStore;
    use tempfile::TempDir;

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("No"), Ok(false));
        assert_eq!(parse_bool("1"), Ok(true));
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn mask_secret_long() {
        assert_eq!(mask_secret("abcdefghijklmnop"), "abcd...mnop");
    }

    #[test]
    fn mask_secret_short() {
        assert_eq!(mask_secret("short"), "*****");
    }

    #[test]
    fn roster_is_trimmed_and_deduplicated() {
        assert_eq!(
            parse_roster(" Dimas, Sari ,,Dimas, Wulan"),
            vec!["Dimas", "Sari", "Wulan"]
        );
        assert!(parse_roster(" , ").is_empty());
    }

    #[test]
    fn apply_port_rejects_garbage() {
        let mut config = AppConfig::empty();
        assert!(apply_value(&mut config, "port", "http").is_err());
        assert!(apply_value(&mut config, "port", "0").is_err());
        apply_value(&mut config, "port", "8080").unwrap();
        assert_eq!(config.port, Some(8080));
    }

    #[test]
    fn apply_server_url_requires_scheme() {
        let mut config = AppConfig::empty();
        assert!(apply_value(&mut config, "server_url", "review.local").is_err());
        apply_value(&mut config, "server_url", "https://review.local/").unwrap();
        assert_eq!(config.server_url.as_deref(), Some("https://review.local"));
    }

    #[test]
    fn apply_google_keys_create_section() {
        let mut config = AppConfig::empty();
        apply_value(&mut config, "google.sheets_id", "sheet-1").unwrap();
        assert_eq!(config.sheets_id(), Some("sheet-1"));
        assert!(config.audio_bucket().is_none());
        assert_eq!(read_value(&config, "google.sheets_id").as_deref(), Some("sheet-1"));
    }

    #[test]
    fn secrets_are_masked_for_display() {
        assert_eq!(display_value("gemini_api_key", "AIzaSy123456789"), "AIza...6789");
        assert_eq!(display_value("google.access_token", "tok"), "***");
        assert_eq!(display_value("gemini_model", "gemini-2.5-flash"), "gemini-2.5-flash");
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(ensure_known_key("api_key").is_err());
        assert!(ensure_known_key("employees").is_ok());
    }

    #[tokio::test]
    async fn set_then_get_roundtrip_through_store() {
        let dir = TempDir::new().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        handle_config_command(
            ConfigAction::Set {
                key: "employees".to_string(),
                value: "Dimas, Sari".to_string(),
            },
            &store,
            &presenter,
        )
        .await
        .unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.employees_or_default(), vec!["Dimas", "Sari"]);
    }

    #[tokio::test]
    async fn set_invalid_value_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        let result = handle_config_command(
            ConfigAction::Set {
                key: "transcode".to_string(),
                value: "sometimes".to_string(),
            },
            &store,
            &presenter,
        )
        .await;

        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
        assert!(!store.exists());
    }
}
