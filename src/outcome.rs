/// Result of one resolved round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    pub fn is_win(&self) -> bool {
        matches!(self, Self::Win)
    }
}

/// bool isomorphism
impl From<bool> for Outcome {
    fn from(win: bool) -> Self {
        match win {
            true => Self::Win,
            false => Self::Loss,
        }
    }
}
impl From<Outcome> for bool {
    fn from(outcome: Outcome) -> bool {
        outcome.is_win()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Loss => write!(f, "loss"),
        }
    }
}
