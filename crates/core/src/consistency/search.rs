//! Target-coverage search over simple paths.
//!
//! [`CoverageSearch`] answers one question: starting from a vertex, is there
//! a path that never repeats a vertex, never enters a blocked vertex, and
//! passes through every target? The provided [`do_dfs`] enumerates simple
//! paths depth first and backtracks on every dead end, so the answer does
//! not depend on the order in which successors are tried.
//!
//! # How it works
//!
//! 1. The start vertex is placed on the path. If it is a target it counts as
//!    covered.
//! 2. At the tip of the path, every successor is a candidate:
//!    a. candidates already on the path are skipped;
//!    b. blocked candidates are skipped, whether or not they are targets;
//!    c. otherwise the candidate is appended. If it was the last uncovered
//!    target the search stops with success;
//!    d. else the search recurses from the candidate and, on failure,
//!    removes it again and restores its target status.
//! 3. When every candidate fails, the tip is a dead end.
//!
//! The search never mutates the graph it runs over. Worst case it visits
//! every simple path from the start vertex.
//!
//! [`do_dfs`]: CoverageSearch::do_dfs

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashSet;

/// Order in which the successors of a path tip are tried.
///
/// Only affects which covering path is found first, never whether one is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BranchOrdering {
    /// Keep the order [`CoverageSearch::successors`] returns.
    #[default]
    AsProvided,
    /// Reverse of the provided order.
    Reversed,
    /// Ascending vertex order.
    Sorted,
}

/// DFS engine options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Candidate ordering strategy.
    pub branch_ordering: BranchOrdering,
}

/// Graph interface for the target-coverage search.
///
/// Implementors describe adjacency and which vertices are impassable; the
/// provided methods run the search.
pub trait CoverageSearch {
    type Vertex: Hash + Ord + Eq + Clone + Debug;

    /// Return DFS engine options for this search.
    fn search_options(&self) -> SearchOptions {
        SearchOptions::default()
    }

    /// Vertices reachable from `source` in one step.
    fn successors(&self, source: &Self::Vertex) -> Vec<Self::Vertex>;

    /// `true` if the path may not enter `v`.
    fn is_blocked(&self, v: &Self::Vertex) -> bool;

    /// Recursive DFS step.
    ///
    /// `path` is non-empty and `on_path` holds exactly its vertices.
    /// `remaining` holds the targets not yet on the path. Returns `true`
    /// once the path covers every target, leaving the covering path in
    /// `path`. On `false` all three are as they were on entry.
    fn do_dfs(
        &self,
        path: &mut Vec<Self::Vertex>,
        on_path: &mut HashSet<Self::Vertex>,
        remaining: &mut HashSet<Self::Vertex>,
    ) -> bool {
        let Some(tip) = path.last() else {
            return false;
        };

        let mut candidates = self.successors(tip);
        match self.search_options().branch_ordering {
            BranchOrdering::AsProvided => {}
            BranchOrdering::Reversed => candidates.reverse(),
            BranchOrdering::Sorted => candidates.sort_unstable(),
        }

        for next in candidates {
            if on_path.contains(&next) {
                continue;
            }
            if self.is_blocked(&next) {
                tracing::trace!(vertex = ?next, "blocked");
                continue;
            }

            let was_target = remaining.remove(&next);
            path.push(next.clone());
            on_path.insert(next.clone());

            if was_target && remaining.is_empty() {
                return true;
            }
            if self.do_dfs(path, on_path, remaining) {
                return true;
            }

            path.pop();
            on_path.remove(&next);
            if was_target {
                remaining.insert(next);
            }
        }

        false
    }

    /// Search for a simple path from `start` covering every vertex in
    /// `targets`.
    ///
    /// Returns the path, starting with `start`, or `None` if no such path
    /// exists. With no targets besides `start` the path is just `[start]`.
    fn covering_path(
        &self,
        start: Self::Vertex,
        mut targets: HashSet<Self::Vertex>,
    ) -> Option<Vec<Self::Vertex>> {
        targets.remove(&start);
        let mut on_path: HashSet<Self::Vertex> = [start.clone()].into_iter().collect();
        let mut path = vec![start];

        if targets.is_empty() || self.do_dfs(&mut path, &mut on_path, &mut targets) {
            Some(path)
        } else {
            None
        }
    }

    /// Whether [`covering_path`](Self::covering_path) finds a path.
    fn covers(&self, start: Self::Vertex, targets: HashSet<Self::Vertex>) -> bool {
        self.covering_path(start, targets).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::digraph::DiGraph;

    struct ToySearch {
        graph: DiGraph<u32>,
        blocked: HashSet<u32>,
        options: SearchOptions,
    }

    impl ToySearch {
        fn new(edges: &[(u32, u32)], blocked: &[u32]) -> Self {
            let mut graph = DiGraph::default();
            for &(a, b) in edges {
                graph.add_edge(a, b);
            }
            Self {
                graph,
                blocked: blocked.iter().copied().collect(),
                options: SearchOptions::default(),
            }
        }
    }

    impl CoverageSearch for ToySearch {
        type Vertex = u32;

        fn search_options(&self) -> SearchOptions {
            self.options
        }

        fn successors(&self, source: &Self::Vertex) -> Vec<Self::Vertex> {
            self.graph
                .successors(source)
                .map(|s| s.iter().copied().collect())
                .unwrap_or_default()
        }

        fn is_blocked(&self, v: &Self::Vertex) -> bool {
            self.blocked.contains(v)
        }
    }

    #[test]
    fn no_targets_is_trivially_covered() {
        let search = ToySearch::new(&[], &[]);
        assert_eq!(search.covering_path(0, HashSet::new()), Some(vec![0]));
        assert_eq!(search.covering_path(0, [0].into()), Some(vec![0]));
    }

    #[test]
    fn path_must_not_repeat_vertices() {
        // 1 and 2 both hang off 0, with no way back to 0.
        let search = ToySearch::new(&[(0, 1), (0, 2)], &[]);
        assert!(search.covers(0, [1].into()));
        assert!(search.covers(0, [2].into()));
        assert!(!search.covers(0, [1, 2].into()));
    }

    #[test]
    fn cycle_back_through_start_is_not_allowed() {
        let search = ToySearch::new(&[(0, 1), (1, 0), (0, 2)], &[]);
        assert!(!search.covers(0, [1, 2].into()));
    }

    #[test]
    fn blocked_vertex_is_never_entered() {
        let search = ToySearch::new(&[(0, 1), (1, 2), (0, 3), (3, 2)], &[1]);
        assert_eq!(search.covering_path(0, [2].into()), Some(vec![0, 3, 2]));

        let search = ToySearch::new(&[(0, 1), (1, 2)], &[1]);
        assert!(!search.covers(0, [2].into()));
    }

    #[test]
    fn blocked_target_is_unreachable() {
        let search = ToySearch::new(&[(0, 1)], &[1]);
        assert!(!search.covers(0, [1].into()));
    }

    #[test]
    fn backtracks_out_of_dead_ends_in_every_order() {
        // From 0 the walk must visit 2 before 1; 1 -> 2 leads nowhere back.
        let edges = [(0, 1), (0, 2), (2, 1), (1, 3)];
        for branch_ordering in [
            BranchOrdering::AsProvided,
            BranchOrdering::Reversed,
            BranchOrdering::Sorted,
        ] {
            let mut search = ToySearch::new(&edges, &[]);
            search.options = SearchOptions { branch_ordering };
            assert_eq!(
                search.covering_path(0, [1, 2, 3].into()),
                Some(vec![0, 2, 1, 3]),
                "{branch_ordering:?}"
            );
        }
    }
}
