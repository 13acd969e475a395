//! Temporal consistency of a variable's markings.
//!
//! A variable is consistent when a single walker, starting at the graph's
//! current node, could have produced its markings: one simple path covers
//! every node where the variable is [`Occupied`](crate::State::Occupied)
//! and never enters a node where it is [`Empty`](crate::State::Empty) or
//! [`Visited`](crate::State::Visited).
//!
//! The search itself lives in [`search`] and is independent of the temporal
//! graph; [`view::VariableView`] adapts a [`TemporalGraph`] and a variable
//! name to it.

use alloc::vec::Vec;

use crate::error::Error;
use crate::graph::identifier::Identifier;
use crate::graph::temporal::TemporalGraph;

pub mod search;
pub mod view;

pub use search::{BranchOrdering, CoverageSearch, SearchOptions};
pub use view::VariableView;

/// Search `graph` for a simple path from its current node covering every
/// node where `variable` is occupied.
///
/// Returns the path, starting at the current node, or `None` if the
/// markings are inconsistent. The graph is not modified.
///
/// # Errors
///
/// Returns [`Error::NoCurrentPosition`] if `graph` has no current node.
pub fn find_covering_path(
    graph: &TemporalGraph,
    variable: &str,
    options: SearchOptions,
) -> Result<Option<Vec<Identifier>>, Error> {
    let start = graph.current().cloned().ok_or(Error::NoCurrentPosition)?;
    let targets = graph.targets(variable);

    tracing::debug!(variable, start = %start, targets = targets.len(), ?options, "checking consistency");

    let path = VariableView::new(graph, variable, options).covering_path(start, targets);

    tracing::debug!(variable, consistent = path.is_some(), "consistency checked");
    Ok(path)
}
