mod app;
mod cli;
mod config;
mod consts;
mod core;
mod engine;
mod error;
mod host;
mod logger;
mod output;
mod utils;
mod watch;

use clap::Parser;

use cli::{Cli, Commands};
use config::Config;

fn main() {
    let cli = Cli::parse();

    let quiet = cli.quiet
        || cli.json
        || cli
            .command
            .as_ref()
            .is_some_and(Commands::wants_quiet_config);
    let config = if quiet {
        Config::load_quiet()
    } else {
        Config::load()
    };

    let cli = match cli.with_config(&config) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = app::run(cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
