//! Command line for running the default batch.
use crate::*;
use clap::Parser;

/// Simulate the Monty Hall problem under both strategies.
///
/// Plays the default batch; only `--help` and `--version` are accepted.
#[derive(Debug, Parser)]
#[command(name = "montyhall", version, about)]
pub struct Args {}

impl Args {
    /// Parses the process arguments, runs the default batch and prints the summary.
    pub fn run() {
        Self::parse();
        let tally = Batch::default().run(&mut rand::rng());
        print!("{}", tally);
    }
}
