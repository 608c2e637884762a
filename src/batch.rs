use super::*;

/// A set of independent games, each played once per [`Strategy`].
///
/// The stay and switch rounds of the same game share nothing: each deals
/// its own doors and makes its own draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch {
    games: usize,
    doors: usize,
}

impl Default for Batch {
    fn default() -> Self {
        Self::new(GAMES, DOORS)
    }
}

impl Batch {
    /// Panics unless there is at least one game of at least [`MIN_DOORS`] doors.
    pub fn new(games: usize, doors: usize) -> Self {
        assert!(games >= 1, "need at least 1 game, got {}", games);
        assert!(doors >= MIN_DOORS, "need at least {} doors, got {}", MIN_DOORS, doors);
        Self { games, doors }
    }
    pub fn games(&self) -> usize {
        self.games
    }
    pub fn doors(&self) -> usize {
        self.doors
    }
    /// Plays every game under both strategies and tallies the wins.
    pub fn run(&self, picker: &mut impl Picker) -> Tally {
        log::info!("playing {} games with {} doors", self.games, self.doors);
        let mut tally = Tally::default();
        for _ in 0..self.games {
            tally.advance();
            for strategy in Strategy::all() {
                let round = Round::resolve(self.doors, strategy, picker);
                log::trace!("{}", round);
                tally.record(strategy, round.outcome());
            }
        }
        log::info!(
            "stay {:.4} switch {:.4}",
            tally.rate(Strategy::Stay),
            tally.rate(Strategy::Switch)
        );
        tally
    }
}
