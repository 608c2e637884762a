//! Monty Hall Binary
//!
//! Plays 1000 games of 3 doors under both strategies and prints the tally.
//!
//! Options: --help, --version

use montyhall::*;

fn main() {
    log();
    cli::Args::run();
}
