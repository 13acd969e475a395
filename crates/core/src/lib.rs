//! Temporal consistency checking for branching worlds.
//!
//! `paradox_core` models a world of named locations replicated once per
//! discrete tick. A walker may step forward one tick, either staying put or
//! moving along a directed edge to another location, and may jump back to
//! any earlier tick of the location it is in. Hosts attach variables to each
//! location-tick and mark them with a [`State`]:
//!
//! - **Unknown** -- nothing is known; the default.
//! - **Empty** -- the walker was not here. Impassable.
//! - **Occupied** -- the walker was here. Must be covered.
//! - **Visited** -- the walker was here and left. Impassable.
//!
//! A variable is *consistent* if one simple path from the current node,
//! stepping only on passable nodes, covers every occupied node. The check is
//! a depth-first backtracking search (see [`consistency`]).
//!
//! Hypothetical edits run inside a transaction on a [`Timeline`], which
//! keeps a snapshot of the graph and either commits or discards it.
//!
//! ```rust,ignore
//! use paradox_core::{State, TemporalGraph};
//!
//! let mut graph = TemporalGraph::new(0, 2)?;
//! graph.create_node("a")?;
//! graph.create_node("b")?;
//! graph.direct_edge("a", "b")?;
//! graph.set_current(("a", 0))?;
//! graph.node_mut(&("b", 2).into())?.set("agent", State::Occupied)?;
//! assert!(graph.is_consistent("agent")?);
//! ```
//!
//! # Crate features
//!
//! - **`serde`** -- enables `Serialize`/`Deserialize` derives on the graph,
//!   node, identifier, state and error types.
//!
//! This crate is `no_std` compatible (requires `alloc`).

#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod consistency;
pub mod error;
pub mod graph;
pub mod state;
pub mod transaction;

pub use error::{Error, ErrorKind};
pub use graph::{Identifier, Node, TemporalGraph};
pub use state::State;
pub use transaction::{rollback, Outcome, Timeline};
