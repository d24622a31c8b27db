//! irkit CLI entry point

use std::process::ExitCode;

use clap::Parser;

use irkit_remote::cli::{app::run, args::Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    run(cli).await
}
