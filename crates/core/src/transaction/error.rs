use core::fmt::{Display, Formatter, Result};

/// Transaction protocol violation.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// `start` while a transaction is already open; transactions do not nest.
    AlreadyPending,
    /// `commit` or `cancel` with no open transaction.
    NotPending,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Self::AlreadyPending => write!(f, "nested transactions are not supported"),
            Self::NotPending => write!(f, "no transaction in progress"),
        }
    }
}
