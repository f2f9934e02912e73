// file: src/main.rs
// version: 1.0.0
// guid: c3a4f2d8-9b1e-4c6a-8f2d-5e7b9a0c1d2e

//! sketchy-pros-compiler - Main entry point

use clap::Parser;
use pros_sketchy::{
    cli::Cli,
    config::Config,
    executor::Executor,
    logging::logger,
};
use tracing::debug;

/// Name used to prefix diagnostics on stderr
const PROG: &str = "sketchy-pros-compiler";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    std::process::exit(run(cli).await);
}

/// Run the wrapper and produce the process exit code.
///
/// A delegate failure exits with the delegate's own code; wrapper failures
/// print one diagnostic line to stderr and exit with the mapped sentinel.
async fn run(cli: Cli) -> i32 {
    let config = match Config::load().await {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}: {}", PROG, err);
            return err.exit_code();
        }
    };

    if let Err(err) = logger::init_logger(&config.logging.level) {
        eprintln!("{}: {}", PROG, err);
        return err.exit_code();
    }

    let executor = Executor::new(config);
    match executor.run(&cli.args).await {
        Ok(code) => {
            debug!("Exiting with delegate code {}", code);
            code
        }
        Err(err) => {
            eprintln!("{}: {}", PROG, err);
            err.exit_code()
        }
    }
}
