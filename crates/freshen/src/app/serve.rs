use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Arg, Command, value_parser};

pub fn serve_command() -> Command {
    Command::new("serve")
        .about("Serve the build markers and the notes index")
        .arg(
            Arg::new("bind")
                .long("bind")
                .help("Listen address (default: 127.0.0.1:8000)")
                .value_parser(value_parser!(SocketAddr)),
        )
        .arg(
            Arg::new("notes-dir")
                .long("notes-dir")
                .help("Directory of *.markdown notes (default: notes)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("hold-secs")
                .long("hold-secs")
                .help("Hold requests that already have the current marker this long (default: 30)")
                .value_parser(value_parser!(u64)),
        )
}
