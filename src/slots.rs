use super::Door;
use super::MIN_DOORS;
use super::Picker;
use super::Slot;

/// The doors of one round, in order, with exactly one car among them.
///
/// The car's index is recorded at construction so the host never has
/// to search for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slots {
    slots: Vec<Slot>,
    car: Door,
}

impl Slots {
    /// Hides the car behind a uniformly random one of `n` doors.
    pub fn deal(n: usize, picker: &mut impl Picker) -> Self {
        assert!(n >= MIN_DOORS, "need at least {} doors, got {}", MIN_DOORS, n);
        Self::from((n, picker.pick(n)))
    }
    /// Number of doors.
    pub fn len(&self) -> usize {
        self.slots.len()
    }
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
    /// Index of the winning door.
    pub fn car(&self) -> Door {
        self.car
    }
    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }
}

/// (door count, car index)
impl From<(usize, Door)> for Slots {
    fn from((n, car): (usize, Door)) -> Self {
        assert!(car < n, "car behind door {} of {}", car, n);
        Self {
            slots: (0..n).map(|door| Slot::from(door == car)).collect(),
            car,
        }
    }
}

impl std::ops::Index<Door> for Slots {
    type Output = Slot;
    fn index(&self, door: Door) -> &Self::Output {
        &self.slots[door]
    }
}

impl std::fmt::Display for Slots {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let slots = self
            .iter()
            .map(|slot| slot.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "[{}]", slots)
    }
}
