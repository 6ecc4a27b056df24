//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, signal handling,
//! the HTTP server runner and the interactive wizard.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;
pub mod serve_app;
pub mod signals;
pub mod wizard_app;

// Re-export commonly used types
pub use app::{build_pipeline, load_merged_config, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction};
pub use presenter::Presenter;
pub use serve_app::run_server;
pub use wizard_app::{run_wizard, WizardOptions};
