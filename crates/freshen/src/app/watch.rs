use clap::{Arg, Command, value_parser};
use freshen_core::VersionMarker;

fn url_arg() -> Arg {
    Arg::new("url")
        .long("url")
        .help("Server root URL (default: watch.base_url or http://127.0.0.1:8000)")
}

fn marker_arg() -> Arg {
    Arg::new("marker")
        .long("marker")
        .help("Marker endpoint to watch")
        .value_parser(value_parser!(VersionMarker))
}

pub fn watch_command() -> Command {
    Command::new("watch")
        .about("Poll the marker until it changes, then run the reload action")
        .long_about(
            "Fetches the current marker once, then polls the server with that token. \
             The first different answer runs --on-change (or just logs) and exits.",
        )
        .arg(url_arg())
        .arg(marker_arg())
        .arg(
            Arg::new("interval-ms")
                .long("interval-ms")
                .help("Delay between polls in milliseconds (default: 300)")
                .value_parser(value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("on-change")
                .long("on-change")
                .help("Shell command to run when the marker changes ($FRESHEN_TOKEN holds the new token)"),
        )
}

pub fn check_command() -> Command {
    Command::new("check")
        .about("Print the server's current marker and exit")
        .arg(url_arg())
        .arg(marker_arg())
}
