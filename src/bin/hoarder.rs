//! Hoarder CLI Binary
//!
//! Resolves the storage service configuration and prints or checks it.

use clap::Parser;
use hoarder::cli::{map_error, Cli, RunContext};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Resolution installs the logger, so nothing can be logged before it.
    let context = match RunContext::new(cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    info!("Hoarder {} starting", hoarder::config::VERSION);

    match context.execute(&cli.command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}
