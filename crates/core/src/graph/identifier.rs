use alloc::string::String;
use core::fmt::{Debug, Display, Formatter, Result};

/// Names one node: a location at a tick.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier {
    pub location: String,
    pub tick: i64,
}

impl Identifier {
    pub fn new(location: impl Into<String>, tick: i64) -> Self {
        Self {
            location: location.into(),
            tick,
        }
    }
}

impl<S: Into<String>> From<(S, i64)> for Identifier {
    fn from((location, tick): (S, i64)) -> Self {
        Self::new(location, tick)
    }
}

impl Debug for Identifier {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "({:?}, {})", self.location, self.tick)
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "({}, {})", self.location, self.tick)
    }
}
