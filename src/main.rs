mod cli;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use sizebar::core::report;
use sizebar::fs::RealFileSystem;

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let root = cli.path.unwrap_or_else(|| PathBuf::from("."));
    let mut out = BufWriter::new(io::stdout().lock());

    let result = match report::run(&RealFileSystem, &root, &mut out).await {
        Ok(()) => out.flush().context("error writing report"),
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("sizebar: {err:#}");
            ExitCode::from(1)
        }
    }
}
