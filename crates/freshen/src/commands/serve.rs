use std::net::SocketAddr;
use std::path::PathBuf;

use clap::ArgMatches;
use freshen_core::ServerSettings;
use freshen_server::ServerConfig;
use freshen_server::server::shutdown::wait_for_shutdown_signal;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use super::{build_runtime, load_config_with_warning};

fn server_config(matches: &ArgMatches, settings: &ServerSettings) -> ServerConfig {
    let mut settings = settings.clone();
    if let Some(bind) = matches.get_one::<SocketAddr>("bind") {
        settings.bind = Some(*bind);
    }
    if let Some(dir) = matches.get_one::<PathBuf>("notes-dir") {
        settings.notes_dir = Some(dir.clone());
    }
    if let Some(hold) = matches.get_one::<u64>("hold-secs") {
        settings.hold_secs = Some(*hold);
    }
    ServerConfig::from(&settings)
}

pub(crate) fn handle_serve_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let server_config = server_config(matches, &config.server);

    info!(
        event = "cli.serve_started",
        bind = %server_config.bind,
        notes_dir = %server_config.notes_dir.display(),
    );
    println!("Serving on http://{}", server_config.bind);

    let runtime = build_runtime()?;
    let result = runtime.block_on(async {
        let shutdown = CancellationToken::new();
        let signal_shutdown = shutdown.clone();
        tokio::spawn(async move {
            if let Err(e) = wait_for_shutdown_signal(signal_shutdown).await {
                error!(
                    event = "cli.serve.signal_handler_failed",
                    error = %e,
                    "Signal handler failed; SIGTERM/SIGINT will not stop the server gracefully",
                );
            }
        });
        freshen_server::run_server(server_config, shutdown).await
    });

    match result {
        Ok(()) => {
            info!(event = "cli.serve_completed");
            Ok(())
        }
        Err(e) => {
            eprintln!("Server failed: {}", e);
            error!(event = "cli.serve_failed", error = %e, error_code = e.error_code());
            Err(e.into())
        }
    }
}
