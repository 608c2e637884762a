//! Monte Carlo simulation of the Monty Hall problem.
//!
//! ## Core Types
//!
//! - [`Slot`] — What is behind one door: the car or a goat
//! - [`Slots`] — The doors of one round, exactly one of them winning
//! - [`Picker`] — Uniform source of door indices
//! - [`Round`] — One play-through, stepped from dealing to resolution
//! - [`Batch`] — Many independent rounds under both strategies
//! - [`Tally`] — Win counts accumulated by a batch
mod batch;
#[cfg(feature = "server")]
pub mod cli;
mod outcome;
mod picker;
mod round;
mod slot;
mod slots;
mod stage;
mod strategy;
mod tally;

pub use batch::*;
pub use outcome::*;
pub use picker::*;
pub use round::*;
pub use slot::*;
pub use slots::*;
pub use stage::*;
pub use strategy::*;
pub use tally::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Index of a door within a round, starting at 0.
pub type Door = usize;
/// Empirical win rates.
pub type Probability = f32;

// ============================================================================
// SIMULATION PARAMETERS
// ============================================================================
/// Rounds played per strategy by the default batch.
pub const GAMES: usize = 1000;
/// Doors per round in the default batch.
pub const DOORS: usize = 3;
/// Fewest doors for which the host can open a goat and still leave a door to switch to.
pub const MIN_DOORS: usize = 3;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr, keeping stdout for the summary.
#[cfg(feature = "server")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
