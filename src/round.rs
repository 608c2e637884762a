use super::*;

/// One play-through of the game.
///
/// A round is stepped explicitly: [`Round::new`] deals the doors,
/// [`Round::choose`] makes the player's pick, [`Round::reveal`] has the
/// host open a goat, [`Round::decide`] applies the [`Strategy`], and
/// [`Round::outcome`] reads the result. Stepping out of order panics.
/// [`Round::resolve`] steps through to the decision and [`Round::play`]
/// runs all of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    slots: Slots,
    stage: Stage,
}

impl Round {
    /// Deals `n` doors with the car behind a uniformly random one.
    pub fn new(n: usize, picker: &mut impl Picker) -> Self {
        Self::from(Slots::deal(n, picker))
    }
    /// Steps a round of `n` doors through to a decision under `strategy`.
    pub fn resolve(n: usize, strategy: Strategy, picker: &mut impl Picker) -> Self {
        Self::new(n, picker)
            .choose(picker)
            .reveal(picker)
            .decide(strategy, picker)
    }
    /// Plays a full round of `n` doors under `strategy`.
    pub fn play(n: usize, strategy: Strategy, picker: &mut impl Picker) -> Outcome {
        Self::resolve(n, strategy, picker).outcome()
    }

    pub fn slots(&self) -> &Slots {
        &self.slots
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    /// The player's initial pick.
    pub fn pick(&self) -> Option<Door> {
        self.stage.pick()
    }
    /// The door the host opened.
    pub fn host(&self) -> Option<Door> {
        self.stage.host()
    }
    /// The player's final selection.
    pub fn last(&self) -> Option<Door> {
        self.stage.last()
    }

    /// The player picks any door, possibly the car's.
    pub fn choose(self, picker: &mut impl Picker) -> Self {
        match self.stage {
            Stage::Created => Self {
                stage: Stage::Chosen {
                    pick: picker.pick(self.slots.len()),
                },
                ..self
            },
            stage => panic!("choose after {}", stage),
        }
    }
    /// The host opens a door that is neither the car nor the pick.
    pub fn reveal(self, picker: &mut impl Picker) -> Self {
        match self.stage {
            Stage::Chosen { pick } => {
                let car = self.slots.car();
                let host = picker.pick_except(self.slots.len(), &[car, pick]);
                assert!(!self.slots[host].is_winning(), "host revealed the car");
                Self {
                    stage: Stage::Revealed { pick, host },
                    ..self
                }
            }
            stage => panic!("reveal after {}", stage),
        }
    }
    /// The player stays, or switches to a door that is neither the pick
    /// nor the host's.
    pub fn decide(self, strategy: Strategy, picker: &mut impl Picker) -> Self {
        match (self.stage, strategy) {
            (Stage::Revealed { pick, host }, Strategy::Stay) => Self {
                stage: Stage::Stayed { pick, host },
                ..self
            },
            (Stage::Revealed { pick, host }, Strategy::Switch) => Self {
                stage: Stage::Switched {
                    pick,
                    host,
                    last: picker.pick_except(self.slots.len(), &[pick, host]),
                },
                ..self
            },
            (stage, _) => panic!("{} after {}", strategy, stage),
        }
    }
    /// Whether the final selection hides the car.
    pub fn outcome(&self) -> Outcome {
        match self.stage.last() {
            Some(last) => Outcome::from(self.slots[last].is_winning()),
            None => panic!("outcome after {}", self.stage),
        }
    }
}

impl From<Slots> for Round {
    fn from(slots: Slots) -> Self {
        assert!(slots.len() >= MIN_DOORS, "need at least {} doors", MIN_DOORS);
        Self {
            slots,
            stage: Stage::Created,
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.slots, self.stage)?;
        if self.stage.is_decided() {
            write!(f, " -> {}", self.outcome())?;
        }
        Ok(())
    }
}
