//! Vocal Review CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vocal_review::cli::{
    app::{load_merged_config, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
    run_server, run_wizard, WizardOptions,
};
use vocal_review::domain::config::AppConfig;
use vocal_review::domain::wizard::LaunchParams;
use vocal_review::infrastructure::XdgConfigStore;

/// Initialize tracing; `RUST_LOG` overrides the per-command default level
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    match cli.command {
        Commands::Config { action } => {
            init_tracing("warn");
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::Serve {
            port,
            static_dir,
            transcode,
        } => {
            init_tracing("info");
            info!("Starting vocal-review server v{}", env!("CARGO_PKG_VERSION"));

            let cli_config = AppConfig {
                port,
                static_dir,
                transcode: if transcode { Some(true) } else { None },
                ..Default::default()
            };
            let config = load_merged_config(cli_config).await;

            if config.port_or_default() == 0 {
                presenter.error("Invalid port: 0");
                return ExitCode::from(EXIT_USAGE_ERROR);
            }

            run_server(config).await
        }
        Commands::Wizard {
            name,
            month,
            server,
        } => {
            init_tracing("warn");

            let cli_config = AppConfig {
                server_url: server,
                ..Default::default()
            };
            let config = load_merged_config(cli_config).await;

            let server_url = config.server_url_or_default().to_string();
            if !(server_url.starts_with("http://") || server_url.starts_with("https://")) {
                presenter.error(&format!("Invalid server URL: {}", server_url));
                return ExitCode::from(EXIT_USAGE_ERROR);
            }

            let options = WizardOptions {
                params: LaunchParams::resolve(name, month),
                server_url,
                roster: config.employees_or_default(),
            };

            run_wizard(options).await
        }
    }
}
