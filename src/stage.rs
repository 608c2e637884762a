use super::Door;

/// Progress of a [`Round`] through its play-through.
///
/// ```text
/// Created → Chosen → Revealed → Stayed   ┐
///                             → Switched ┴→ (resolved into an Outcome)
/// ```
///
/// Each variant carries the picks made so far.
///
/// [`Round`]: super::Round
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Stage {
    /// Doors dealt, nothing picked yet.
    Created,
    /// The player made the initial pick.
    Chosen { pick: Door },
    /// The host opened a goat door other than the pick.
    Revealed { pick: Door, host: Door },
    /// The player kept the initial pick.
    Stayed { pick: Door, host: Door },
    /// The player moved to a door that is neither the pick nor the host's.
    Switched { pick: Door, host: Door, last: Door },
}

impl Stage {
    /// The player's initial pick, once made.
    pub fn pick(&self) -> Option<Door> {
        match self {
            Self::Created => None,
            Self::Chosen { pick } => Some(*pick),
            Self::Revealed { pick, .. } => Some(*pick),
            Self::Stayed { pick, .. } => Some(*pick),
            Self::Switched { pick, .. } => Some(*pick),
        }
    }
    /// The door the host opened, once opened.
    pub fn host(&self) -> Option<Door> {
        match self {
            Self::Revealed { host, .. } => Some(*host),
            Self::Stayed { host, .. } => Some(*host),
            Self::Switched { host, .. } => Some(*host),
            _ => None,
        }
    }
    /// The player's final selection, once decided.
    pub fn last(&self) -> Option<Door> {
        match self {
            Self::Stayed { pick, .. } => Some(*pick),
            Self::Switched { last, .. } => Some(*last),
            _ => None,
        }
    }
    /// True once the player has stayed or switched.
    pub fn is_decided(&self) -> bool {
        matches!(self, Self::Stayed { .. } | Self::Switched { .. })
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Created => write!(f, "dealt"),
            Self::Chosen { pick } => write!(f, "pick {}", pick),
            Self::Revealed { pick, host } => write!(f, "pick {} host {}", pick, host),
            Self::Stayed { pick, host } => write!(f, "pick {} host {} stay {}", pick, host, pick),
            Self::Switched { pick, host, last } => {
                write!(f, "pick {} host {} switch {}", pick, host, last)
            }
        }
    }
}
