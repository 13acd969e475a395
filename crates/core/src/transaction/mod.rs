//! Speculative edits of a [`TemporalGraph`].
//!
//! [`Timeline`] owns a live graph and, while a transaction is open, a
//! pending snapshot of it. Every graph operation on the timeline goes to
//! the snapshot while one exists, so hosts keep a single handle and the
//! live graph stays untouched until [`Timeline::commit`]. There is at most
//! one open transaction; commit replaces the live graph wholesale and
//! cancel drops the snapshot.
//!
//! ```rust,ignore
//! use paradox_core::transaction::{rollback, Outcome, Timeline};
//!
//! let outcome = timeline.transaction(|graph| {
//!     graph.node_mut(&id)?.set("agent", State::Occupied)?;
//!     if !graph.is_consistent("agent")? {
//!         return rollback();
//!     }
//!     Ok(Outcome::Commit)
//! })?;
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;

use self::error::Error as TransactionError;
use crate::consistency::SearchOptions;
use crate::error::Error;
use crate::graph::identifier::Identifier;
use crate::graph::node::Node;
use crate::graph::temporal::TemporalGraph;

pub mod error;

/// How a transaction scope ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The snapshot replaced the live graph.
    Commit,
    /// The snapshot was discarded.
    Rollback,
}

/// The rollback signal.
///
/// Returning it (usually with `?`) from inside
/// [`Timeline::transaction`] discards the transaction. Nothing else
/// consumes it, so anywhere outside a scope it reaches the caller as
/// [`Error::Rollback`].
///
/// # Errors
///
/// Always returns [`Error::Rollback`].
pub const fn rollback<T>() -> Result<T, Error> {
    Err(Error::Rollback)
}

/// A [`TemporalGraph`] with copy-on-write transactions.
#[derive(Debug, Clone)]
pub struct Timeline {
    live: TemporalGraph,
    pending: Option<TemporalGraph>,
}

impl From<TemporalGraph> for Timeline {
    fn from(live: TemporalGraph) -> Self {
        Self {
            live,
            pending: None,
        }
    }
}

impl Timeline {
    /// Timeline over a fresh graph on the ticks `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `start > end`.
    pub fn new(start: i64, end: i64) -> Result<Self, Error> {
        TemporalGraph::new(start, end).map(Self::from)
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The committed graph, ignoring any open transaction.
    #[must_use]
    pub const fn live(&self) -> &TemporalGraph {
        &self.live
    }

    /// The committed graph. An open transaction is discarded.
    #[must_use]
    pub fn into_inner(self) -> TemporalGraph {
        self.live
    }

    /// The graph operations currently apply to: the snapshot while a
    /// transaction is open, the live graph otherwise.
    #[must_use]
    pub const fn graph(&self) -> &TemporalGraph {
        match &self.pending {
            Some(snapshot) => snapshot,
            None => &self.live,
        }
    }

    /// Mutable access to [`graph`](Self::graph).
    pub fn graph_mut(&mut self) -> &mut TemporalGraph {
        match &mut self.pending {
            Some(snapshot) => snapshot,
            None => &mut self.live,
        }
    }

    /// Opens a transaction on a snapshot of the live graph.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::AlreadyPending`] if one is already open.
    pub fn start(&mut self) -> Result<(), Error> {
        if self.pending.is_some() {
            return Err(TransactionError::AlreadyPending.into());
        }
        tracing::debug!(nodes = self.live.node_count(), "transaction started");
        self.pending = Some(self.live.clone());
        Ok(())
    }

    /// Makes the snapshot the live graph.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::NotPending`] if no transaction is open.
    pub fn commit(&mut self) -> Result<(), Error> {
        let snapshot = self.pending.take().ok_or(TransactionError::NotPending)?;
        self.live = snapshot;
        tracing::debug!("transaction committed");
        Ok(())
    }

    /// Discards the snapshot, leaving the live graph as it was.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::NotPending`] if no transaction is open.
    pub fn cancel(&mut self) -> Result<(), Error> {
        self.pending.take().ok_or(TransactionError::NotPending)?;
        tracing::debug!("transaction cancelled");
        Ok(())
    }

    /// Runs `f` on a snapshot of the live graph.
    ///
    /// `Ok(Outcome::Commit)` commits the snapshot. `Ok(Outcome::Rollback)`
    /// and the [`rollback`] signal discard it; the signal does not escape
    /// the scope. Any other error discards the snapshot and is returned.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::AlreadyPending`] if a transaction is
    /// already open (it is left open), or the error `f` returned.
    pub fn transaction<F>(&mut self, f: F) -> Result<Outcome, Error>
    where
        F: FnOnce(&mut TemporalGraph) -> Result<Outcome, Error>,
    {
        self.start()?;
        match f(self.graph_mut()) {
            Ok(Outcome::Commit) => {
                self.commit()?;
                Ok(Outcome::Commit)
            }
            Ok(Outcome::Rollback) | Err(Error::Rollback) => {
                self.cancel()?;
                Ok(Outcome::Rollback)
            }
            Err(e) => {
                self.cancel()?;
                Err(e)
            }
        }
    }

    /// See [`TemporalGraph::create_node`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateLocation`] if `name` is already registered.
    pub fn create_node(&mut self, name: impl Into<String>) -> Result<(), Error> {
        self.graph_mut().create_node(name)
    }

    /// See [`TemporalGraph::direct_edge`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLocation`] if either name is not registered.
    pub fn direct_edge(&mut self, from: &str, to: &str) -> Result<(), Error> {
        self.graph_mut().direct_edge(from, to)
    }

    /// See [`TemporalGraph::set_current`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownIdentifier`] if there is no node for `id`.
    pub fn set_current(&mut self, id: impl Into<Identifier>) -> Result<(), Error> {
        self.graph_mut().set_current(id)
    }

    #[must_use]
    pub const fn current(&self) -> Option<&Identifier> {
        self.graph().current()
    }

    /// # Errors
    ///
    /// Returns [`Error::UnknownIdentifier`] if there is no node for `id`.
    pub fn node(&self, id: &Identifier) -> Result<&Node, Error> {
        self.graph().node(id)
    }

    /// # Errors
    ///
    /// Returns [`Error::UnknownIdentifier`] if there is no node for `id`.
    pub fn node_mut(&mut self, id: &Identifier) -> Result<&mut Node, Error> {
        self.graph_mut().node_mut(id)
    }

    /// # Errors
    ///
    /// Returns [`Error::UnknownIdentifier`] if there is no node for `id`.
    pub fn neighbors(&self, id: &Identifier) -> Result<Vec<&Node>, Error> {
        self.graph().neighbors(id)
    }

    /// # Errors
    ///
    /// Returns [`Error::UnknownIdentifier`] if there is no node for `id`.
    pub fn neighbor_ids(&self, id: &Identifier) -> Result<&HashSet<Identifier>, Error> {
        self.graph().neighbor_ids(id)
    }

    /// See [`TemporalGraph::is_consistent`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCurrentPosition`] if no current node is set.
    pub fn is_consistent(&self, variable: &str) -> Result<bool, Error> {
        self.graph().is_consistent(variable)
    }

    /// See [`TemporalGraph::find_path`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCurrentPosition`] if no current node is set.
    pub fn find_path(&self, variable: &str) -> Result<Option<Vec<Identifier>>, Error> {
        self.graph().find_path(variable)
    }

    /// See [`TemporalGraph::find_path_with`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCurrentPosition`] if no current node is set.
    pub fn find_path_with(
        &self,
        variable: &str,
        options: SearchOptions,
    ) -> Result<Option<Vec<Identifier>>, Error> {
        self.graph().find_path_with(variable, options)
    }
}
