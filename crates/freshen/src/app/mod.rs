mod global;
mod serve;
mod watch;


use clap::Command;

pub fn build_cli() -> Command {
    global::root_command()
        .subcommand(watch::watch_command())
        .subcommand(watch::check_command())
        .subcommand(serve::serve_command())
}
