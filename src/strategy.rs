/// What the player does after the host opens a door.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strategy {
    /// Keep the initial pick.
    Stay,
    /// Move to another closed door.
    Switch,
}

impl Strategy {
    /// Both strategies, in the order a batch plays them.
    pub const fn all() -> [Strategy; 2] {
        [Strategy::Stay, Strategy::Switch]
    }
    /// Past tense, as printed in the summary.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Stay => "stayed",
            Strategy::Switch => "switched",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Strategy::Stay => write!(f, "stay"),
            Strategy::Switch => write!(f, "switch"),
        }
    }
}
