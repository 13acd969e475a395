use core::fmt::{Display, Formatter, Result};

use crate::error::Error;

/// State a variable holds at one location-tick.
///
/// The discriminants are the numeric codes hosts may store; see
/// [`State::try_from`].
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum State {
    /// Never set. Passable, never a target.
    #[default]
    Unknown = 0,
    /// Known to be absent. Blocks traversal.
    Empty = 1,
    /// Must be covered by the path.
    Occupied = 2,
    /// Already passed through. Blocks traversal.
    Visited = 3,
}

impl State {
    /// Every state, in code order.
    pub const ALL: [Self; 4] = [Self::Unknown, Self::Empty, Self::Occupied, Self::Visited];

    /// `true` for states that make a node impassable.
    #[must_use]
    pub const fn is_blocking(self) -> bool {
        matches!(self, Self::Empty | Self::Visited)
    }

    /// `true` for states the consistency search has to cover.
    #[must_use]
    pub const fn is_target(self) -> bool {
        matches!(self, Self::Occupied)
    }
}

impl TryFrom<u8> for State {
    type Error = Error;

    fn try_from(code: u8) -> core::result::Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(Error::InvalidState(code))
    }
}

impl From<State> for u8 {
    fn from(state: State) -> Self {
        state as Self
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let name = match self {
            Self::Unknown => "UNKNOWN",
            Self::Empty => "EMPTY",
            Self::Occupied => "OCCUPIED",
            Self::Visited => "VISITED",
        };
        f.write_str(name)
    }
}
