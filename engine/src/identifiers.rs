use std::fmt;
use std::num::NonZeroU32;

/// Identifier of a player whose marker occupies a slot. Never zero: zero is
/// how the raw slot view spells "empty".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(NonZeroU32);

impl PlayerId {
    pub fn new(id: u32) -> Option<Self> {
        NonZeroU32::new(id).map(Self)
    }

    /// Id for the roster entry at `index`, counting from 1.
    pub fn from_index(index: usize) -> Self {
        let offset = u32::try_from(index).unwrap_or(u32::MAX);
        Self(NonZeroU32::MIN.saturating_add(offset))
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl From<PlayerId> for u32 {
    fn from(id: PlayerId) -> Self {
        id.get()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
