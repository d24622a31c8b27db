//! CLI argument definitions using Clap

use clap::{ArgAction, Parser};

/// irkit - command-line remote for IRKit infrared transmitters
#[derive(Parser, Debug)]
#[command(name = "irkit")]
#[command(version)]
#[command(about = "Send and record infrared signals through an IRKit device")]
#[command(long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v shows progress, -vv shows resolution detail)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Commands to run: `list`, `save <name>...`, or stored signal names
    /// (a trailing *N sends a signal N times)
    #[arg(required = true, num_args = 1.., value_name = "COMMAND")]
    pub commands: Vec<String>,
}
