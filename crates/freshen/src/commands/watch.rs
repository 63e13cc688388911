use clap::ArgMatches;
use freshen_core::{
    CommandReload, FreshenConfig, FreshnessPoller, LogReload, PollerExit, ReloadTrigger,
    VersionMarker, VersionToken, WatchConfig,
};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use super::{build_runtime, load_config_with_warning};

/// Layer CLI flags over the `[watch]` section.
fn watch_config(matches: &ArgMatches, config: &FreshenConfig) -> Result<WatchConfig, String> {
    let mut watch = config.watch.clone();

    if let Some(url) = matches.get_one::<String>("url") {
        watch.base_url = Some(url.clone());
    }
    if let Some(marker) = matches.get_one::<VersionMarker>("marker") {
        watch.marker = Some(*marker);
    }
    if let Ok(Some(interval)) = matches.try_get_one::<u64>("interval-ms") {
        watch.interval_ms = Some(*interval);
    }
    if let Ok(Some(command)) = matches.try_get_one::<String>("on-change") {
        watch.on_change = Some(command.clone());
    }

    let merged = FreshenConfig {
        watch,
        server: config.server.clone(),
    };
    merged.validate().map_err(|e| e.to_string())?;
    Ok(merged.watch)
}

/// The trigger `watch` fires: the `on_change` command when set, otherwise a log line.
enum WatchTrigger {
    Command(CommandReload),
    Log(LogReload),
}

impl WatchTrigger {
    fn from_config(watch: &WatchConfig) -> Self {
        match &watch.on_change {
            Some(command) => Self::Command(CommandReload::new(command.clone())),
            None => Self::Log(LogReload),
        }
    }
}

impl ReloadTrigger for WatchTrigger {
    async fn reload(&self, observed: &VersionToken) {
        match self {
            Self::Command(trigger) => trigger.reload(observed).await,
            Self::Log(trigger) => trigger.reload(observed).await,
        }
    }
}

pub(crate) fn handle_watch_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let watch = watch_config(matches, &config).inspect_err(|e| {
        eprintln!("Invalid watch settings: {}", e);
    })?;

    info!(
        event = "cli.watch_started",
        url = watch.base_url(),
        marker = %watch.marker(),
        interval_ms = watch.interval().as_millis() as u64,
    );

    let poller = FreshnessPoller::from_config(&watch).inspect_err(|e| {
        eprintln!("Cannot watch {}: {}", watch.base_url(), e);
        error!(event = "cli.watch_failed", error = %e, error_code = e.error_code());
    })?;

    let trigger = WatchTrigger::from_config(&watch);

    let runtime = build_runtime()?;
    let result = runtime.block_on(async {
        let cancel = CancellationToken::new();
        let ctrl_c_cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                ctrl_c_cancel.cancel();
            }
        });
        poller.start(&trigger, cancel).await
    });

    match result {
        Ok(PollerExit::Reloaded(token)) => {
            println!("Marker changed: {}", token);
            info!(event = "cli.watch_completed", token = %token);
            Ok(())
        }
        Ok(PollerExit::Cancelled) => {
            println!("Stopped watching.");
            info!(event = "cli.watch_cancelled");
            Ok(())
        }
        Err(e) => {
            eprintln!(
                "Could not read the initial marker from {}: {}",
                watch.base_url(),
                e
            );
            error!(event = "cli.watch_failed", error = %e, error_code = e.error_code());
            Err(e.into())
        }
    }
}

pub(crate) fn handle_check_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let watch = watch_config(matches, &config).inspect_err(|e| {
        eprintln!("Invalid watch settings: {}", e);
    })?;

    let poller = FreshnessPoller::from_config(&watch).inspect_err(|e| {
        eprintln!("Cannot check {}: {}", watch.base_url(), e);
    })?;

    let runtime = build_runtime()?;
    match runtime.block_on(poller.initialize()) {
        Ok(token) => {
            println!("{}", token);
            Ok(())
        }
        Err(e) => {
            eprintln!("Could not read marker from {}: {}", watch.base_url(), e);
            error!(event = "cli.check_failed", error = %e, error_code = e.error_code());
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::build_cli;

    fn watch_matches(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["freshen", "watch"];
        argv.extend_from_slice(args);
        build_cli()
            .try_get_matches_from(argv)
            .unwrap()
            .subcommand_matches("watch")
            .unwrap()
            .clone()
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = FreshenConfig::default();
        config.watch.base_url = Some("http://from-config.test".to_string());
        config.watch.interval_ms = Some(1000);

        let matches = watch_matches(&[
            "--url",
            "http://from-flag.test:9000",
            "--marker",
            "version",
            "--on-change",
            "true",
        ]);
        let watch = watch_config(&matches, &config).unwrap();

        assert_eq!(watch.base_url(), "http://from-flag.test:9000");
        assert_eq!(watch.marker(), VersionMarker::Version);
        assert_eq!(watch.interval_ms, Some(1000));
        assert_eq!(watch.on_change.as_deref(), Some("true"));
    }

    #[test]
    fn test_invalid_url_flag_rejected() {
        let matches = watch_matches(&["--url", "ftp://nope"]);
        assert!(watch_config(&matches, &FreshenConfig::default()).is_err());
    }

    #[test]
    fn test_check_ignores_watch_only_flags() {
        let matches = build_cli()
            .try_get_matches_from(vec!["freshen", "check", "--url", "http://c.test"])
            .unwrap();
        let check = matches.subcommand_matches("check").unwrap();
        let watch = watch_config(check, &FreshenConfig::default()).unwrap();
        assert_eq!(watch.base_url(), "http://c.test");
        assert_eq!(watch.interval_ms, None);
    }

    #[test]
    fn test_trigger_follows_on_change() {
        let mut watch = WatchConfig::default();
        assert!(matches!(WatchTrigger::from_config(&watch), WatchTrigger::Log(_)));

        watch.on_change = Some("make reload".to_string());
        match WatchTrigger::from_config(&watch) {
            WatchTrigger::Command(trigger) => assert_eq!(trigger.command(), "make reload"),
            WatchTrigger::Log(_) => panic!("expected the on_change command"),
        }
    }
}
