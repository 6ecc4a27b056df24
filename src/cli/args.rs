//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

/// Vocal Review - voice-based employee reviews
#[derive(Parser, Debug)]
#[command(name = "vocal-review")]
#[command(version)]
#[command(about = "Voice-based employee review wizard and submission server")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the review submission server
    Serve {
        /// Port to listen on
        #[arg(short = 'p', long, value_name = "PORT")]
        port: Option<u16>,

        /// Directory with the wizard page
        #[arg(long, value_name = "DIR")]
        static_dir: Option<String>,

        /// Normalize audio with ffmpeg before transcription
        #[arg(long)]
        transcode: bool,
    },
    /// Fill in a review interactively in the terminal
    Wizard {
        /// Name of the employee being reviewed
        #[arg(short = 'n', long, value_name = "NAME")]
        name: Option<String>,

        /// Review period, e.g. "Oktober"
        #[arg(short = 'm', long, value_name = "MONTH")]
        month: Option<String>,

        /// Server to submit to
        #[arg(short = 's', long, value_name = "URL")]
        server: Option<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "port",
    "static_dir",
    "gemini_api_key",
    "gemini_model",
    "transcode",
    "server_url",
    "employees",
    "google.audio_bucket",
    "google.sheets_id",
    "google.access_token",
];

/// Keys whose values are masked on output
pub const SECRET_CONFIG_KEYS: &[&str] = &["gemini_api_key", "google.access_token"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
