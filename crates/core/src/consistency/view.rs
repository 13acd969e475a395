use alloc::vec::Vec;

use crate::consistency::search::{CoverageSearch, SearchOptions};
use crate::graph::identifier::Identifier;
use crate::graph::temporal::TemporalGraph;

/// A [`TemporalGraph`] seen through one variable: nodes where the variable
/// is blocking are impassable.
#[derive(Debug, Clone, Copy)]
pub struct VariableView<'g> {
    graph: &'g TemporalGraph,
    variable: &'g str,
    options: SearchOptions,
}

impl<'g> VariableView<'g> {
    #[must_use]
    pub const fn new(graph: &'g TemporalGraph, variable: &'g str, options: SearchOptions) -> Self {
        Self {
            graph,
            variable,
            options,
        }
    }
}

impl CoverageSearch for VariableView<'_> {
    type Vertex = Identifier;

    fn search_options(&self) -> SearchOptions {
        self.options
    }

    fn successors(&self, source: &Identifier) -> Vec<Identifier> {
        self.graph
            .neighbor_ids(source)
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn is_blocked(&self, v: &Identifier) -> bool {
        self.graph
            .node(v)
            .ok()
            .is_none_or(|node| node.get(self.variable).is_blocking())
    }
}
