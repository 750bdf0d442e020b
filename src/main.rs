use apnav::cli;
use apnav::config::Config;
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, info};

fn main() -> ExitCode {
    let config = Config::parse();
    init_logging(config.verbose);

    let program = std::env::args().next().unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
    let program = cli::executable_name(&program);

    match cli::run(config.measurements.as_deref()) {
        Ok(result) => {
            info!("{}", result.detailed_description());
            println!("{}", result);
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(%err, "定位失败");
            println!("{}", cli::error_message(&err, program));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    if verbose {
        subscriber.with_max_level(tracing::Level::DEBUG).init();
    } else {
        subscriber.with_max_level(tracing::Level::WARN).init();
    }
}
