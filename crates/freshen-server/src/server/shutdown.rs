use tokio_util::sync::CancellationToken;
use tracing::info;

/// Wait for SIGTERM or SIGINT/Ctrl-C, then cancel `token`.
pub async fn wait_for_shutdown_signal(token: CancellationToken) -> std::io::Result<()> {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        let mut sigterm =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;

        tokio::select! {
            _ = ctrl_c => {
                info!(event = "server.signal_received", signal = "SIGINT");
            }
            _ = sigterm.recv() => {
                info!(event = "server.signal_received", signal = "SIGTERM");
            }
            _ = token.cancelled() => return Ok(()),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::select! {
            result = ctrl_c => {
                result?;
                info!(event = "server.signal_received", signal = "SIGINT");
            }
            _ = token.cancelled() => return Ok(()),
        }
    }

    token.cancel();
    Ok(())
}
