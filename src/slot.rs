/// What is behind a single door.
///
/// A slot is either the winning one (the car) or not (a goat).
/// It never changes after the round deals it.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Slot(bool);

impl Slot {
    /// The car.
    pub const fn car() -> Self {
        Self(true)
    }
    /// A goat.
    pub const fn goat() -> Self {
        Self(false)
    }
    pub fn is_winning(&self) -> bool {
        self.0
    }
}

/// bool isomorphism
impl From<bool> for Slot {
    fn from(winning: bool) -> Self {
        Self(winning)
    }
}
impl From<Slot> for bool {
    fn from(slot: Slot) -> bool {
        slot.0
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.0 {
            true => write!(f, "car"),
            false => write!(f, "goat"),
        }
    }
}
