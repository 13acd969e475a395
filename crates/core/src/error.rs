use alloc::string::String;
use core::fmt::{Display, Formatter, Result};

use derive_more::From;

use crate::graph::identifier::Identifier;
use crate::transaction::error::Error as TransactionError;

/// Coarse category of an [`Error`], for callers that branch on the kind of
/// failure rather than on the exact variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An identifier or location name that is not part of the graph.
    Lookup,
    /// A value outside its allowed domain.
    InvalidValue,
    /// A location name registered twice.
    Duplicate,
    /// A transaction operation issued in the wrong state.
    Protocol,
    /// The rollback signal, unconsumed by any transaction scope.
    Rollback,
    /// An operation invoked before its precondition holds.
    Precondition,
}

/// Error returned by graph, node and transaction operations.
///
/// Every failing operation leaves the graph it was invoked on unchanged.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum Error {
    /// No node exists for the identifier.
    UnknownIdentifier(Identifier),
    /// The location name was never registered.
    UnknownLocation(String),
    /// The location name is already registered.
    DuplicateLocation(String),
    /// A numeric state code outside `0..=3`.
    InvalidState(u8),
    /// Attempt to overwrite the identifier of a node.
    IdentifierReassignment(Identifier),
    /// Graph constructed with `start > end`.
    InvalidRange { start: i64, end: i64 },
    /// Consistency query issued with no current position set.
    NoCurrentPosition,
    /// Transaction protocol violation.
    #[from]
    Transaction(TransactionError),
    /// Request to discard the pending transaction.
    ///
    /// Consumed by [`Timeline::transaction`](crate::transaction::Timeline::transaction);
    /// anywhere else it reaches the caller like any other error.
    Rollback,
}

impl Error {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownIdentifier(_) | Self::UnknownLocation(_) => ErrorKind::Lookup,
            Self::InvalidState(_) | Self::IdentifierReassignment(_) | Self::InvalidRange { .. } => {
                ErrorKind::InvalidValue
            }
            Self::DuplicateLocation(_) => ErrorKind::Duplicate,
            Self::Transaction(_) => ErrorKind::Protocol,
            Self::Rollback => ErrorKind::Rollback,
            Self::NoCurrentPosition => ErrorKind::Precondition,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Self::UnknownIdentifier(id) => write!(f, "no such node id {id}"),
            Self::UnknownLocation(name) => write!(f, "no such location {name:?}"),
            Self::DuplicateLocation(name) => write!(f, "location {name:?} already exists"),
            Self::InvalidState(code) => write!(f, "value {code} must be a state"),
            Self::IdentifierReassignment(id) => write!(f, "cannot reassign ident of {id}"),
            Self::InvalidRange { start, end } => {
                write!(f, "start tick {start} is after end tick {end}")
            }
            Self::NoCurrentPosition => write!(f, "no current node set"),
            Self::Transaction(e) => write!(f, "{e}"),
            Self::Rollback => write!(f, "transaction rollback outside of a transaction"),
        }
    }
}

impl core::error::Error for Error {}
