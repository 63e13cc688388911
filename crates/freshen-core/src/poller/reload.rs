use std::future::Future;

use tokio::process::Command;
use tracing::{error, info, warn};

use crate::token::VersionToken;

/// Environment variable carrying the newly observed token to `on_change` commands.
pub const TOKEN_ENV_VAR: &str = "FRESHEN_TOKEN";

/// The side effect fired once a new token is observed.
///
/// Fire-and-forget: implementations handle their own failures. The poll
/// loop ends right after the returned future completes.
pub trait ReloadTrigger: Send + Sync {
    fn reload(&self, observed: &VersionToken) -> impl Future<Output = ()> + Send;
}

impl<F> ReloadTrigger for F
where
    F: Fn(&VersionToken) + Send + Sync,
{
    async fn reload(&self, observed: &VersionToken) {
        self(observed)
    }
}

/// Only records the change in the structured log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReload;

impl ReloadTrigger for LogReload {
    async fn reload(&self, observed: &VersionToken) {
        info!(event = "core.poller.reload_triggered", token = %observed);
    }
}

/// Runs a shell command with [`TOKEN_ENV_VAR`] set, waiting for it to exit.
#[derive(Debug, Clone)]
pub struct CommandReload {
    command: String,
}

impl CommandReload {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl ReloadTrigger for CommandReload {
    async fn reload(&self, observed: &VersionToken) {
        info!(
            event = "core.reload.command_started",
            command = %self.command,
            token = %observed,
        );

        let status = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .env(TOKEN_ENV_VAR, observed.as_str())
            .status()
            .await;

        match status {
            Ok(status) if status.success() => {
                info!(event = "core.reload.command_completed", command = %self.command);
            }
            Ok(status) => {
                warn!(
                    event = "core.reload.command_failed",
                    command = %self.command,
                    exit_code = ?status.code(),
                );
            }
            Err(e) => {
                error!(
                    event = "core.reload.command_spawn_failed",
                    command = %self.command,
                    error = %e,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl CapturedLog {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_closure_is_a_trigger() {
        let seen = Mutex::new(Vec::new());
        let trigger = |token: &VersionToken| seen.lock().unwrap().push(token.clone());
        trigger.reload(&VersionToken::from("T2")).await;
        assert_eq!(*seen.lock().unwrap(), vec![VersionToken::from("T2")]);
    }

    #[tokio::test]
    async fn test_log_reload_emits_reload_triggered() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        LogReload.reload(&VersionToken::from("T2")).await;

        let output = log.contents();
        assert!(output.contains("\"event\":\"core.poller.reload_triggered\""), "{output}");
        assert!(output.contains("\"token\":\"T2\""), "{output}");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_command_reload_passes_token() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("token.txt");
        let trigger = CommandReload::new(format!(
            "printf '%s' \"${}\" > '{}'",
            TOKEN_ENV_VAR,
            out.display()
        ));

        trigger.reload(&VersionToken::from("1700000000123456789")).await;

        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(written, "1700000000123456789");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_command_reload_failure_does_not_panic() {
        CommandReload::new("exit 3")
            .reload(&VersionToken::from("T2"))
            .await;
    }

    #[cfg(unix)]
    #[tokio::test(flavor = "current_thread")]
    async fn test_command_reload_leaves_runtime_free() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let ticker = tokio::spawn({
            let ticks = Arc::clone(&ticks);
            async move {
                loop {
                    tokio::time::sleep(Duration::from_millis(20)).await;
                    ticks.fetch_add(1, Ordering::SeqCst);
                }
            }
        });

        CommandReload::new("sleep 0.5")
            .reload(&VersionToken::from("T2"))
            .await;
        ticker.abort();

        // A blocking wait on the single runtime thread would leave this at zero.
        assert!(ticks.load(Ordering::SeqCst) >= 5);
    }
}
