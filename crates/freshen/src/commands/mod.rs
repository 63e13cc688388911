use clap::ArgMatches;
use freshen_core::FreshenConfig;
use tracing::{error, warn};

mod serve;
mod watch;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("watch", sub_matches)) => watch::handle_watch_command(sub_matches),
        Some(("check", sub_matches)) => watch::handle_check_command(sub_matches),
        Some(("serve", sub_matches)) => serve::handle_serve_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via
/// stderr and a `cli.config.load_failed` event.
fn load_config_with_warning() -> FreshenConfig {
    match FreshenConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.freshen/config.toml and ./.freshen/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                error_code = e.error_code(),
            );
            FreshenConfig::default()
        }
    }
}

fn build_runtime() -> Result<tokio::runtime::Runtime, Box<dyn std::error::Error>> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {}", e).into())
}
