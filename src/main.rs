mod config;
mod digest;
mod util;

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::{Config, OutputMode},
    digest::FileDigester,
};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    let digester = FileDigester::new(Config::new(args.output));
    match digester.run(&args.path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error -> {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries only the digest. `RUST_LOG` is the one
/// environment variable read, and it only changes log verbosity.
fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[derive(Parser, Debug)]
#[command(name = "filedigest")]
#[command(version, about = "Print or store the SHA-256 digest of a file", long_about = None)]
struct Args {
    /// File to digest
    path: PathBuf,
    /// Where to write the digest
    #[arg(short, long, value_enum, default_value_t = OutputMode::Print)]
    output: OutputMode,
}
