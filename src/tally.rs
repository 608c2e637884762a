use super::*;

/// Win counts accumulated over a batch.
///
/// Every game plays one round per [`Strategy`], so both counters are
/// bounded by the number of games.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Tally {
    games: usize,
    stayed: usize,
    switched: usize,
}

impl Tally {
    pub fn games(&self) -> usize {
        self.games
    }
    pub fn stayed(&self) -> usize {
        self.stayed
    }
    pub fn switched(&self) -> usize {
        self.switched
    }
    /// Rounds won under a strategy.
    pub fn wins(&self, strategy: Strategy) -> usize {
        match strategy {
            Strategy::Stay => self.stayed,
            Strategy::Switch => self.switched,
        }
    }
    /// Fraction of games won under a strategy.
    pub fn rate(&self, strategy: Strategy) -> Probability {
        match self.games {
            0 => 0.,
            n => self.wins(strategy) as Probability / n as Probability,
        }
    }
    /// Counts one more game.
    pub fn advance(&mut self) {
        self.games += 1;
    }
    /// Counts a round played under a strategy.
    pub fn record(&mut self, strategy: Strategy, outcome: Outcome) {
        if outcome.is_win() {
            match strategy {
                Strategy::Stay => self.stayed += 1,
                Strategy::Switch => self.switched += 1,
            }
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Games run: {}", self.games)?;
        for strategy in Strategy::all() {
            writeln!(f, "Games won {}: {}", strategy.label(), self.wins(strategy))?;
        }
        Ok(())
    }
}
