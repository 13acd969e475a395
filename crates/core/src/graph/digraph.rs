use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::{HashMap, HashSet};

/// Directed graph backed by an adjacency map.
///
/// Each vertex of type `T` maps to the set of its outgoing neighbors.
/// Iteration over a neighbor set follows the hash order of the set and is
/// not meaningful.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: ::serde::Serialize",
        deserialize = "T: ::serde::Deserialize<'de>"
    ))
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiGraph<T>
where
    T: Hash + Eq + Clone + Debug,
{
    /// Maps each vertex to the set of vertices it has edges to.
    #[cfg_attr(feature = "serde", serde(with = "crate::graph::pairs"))]
    adj_map: HashMap<T, HashSet<T>>,
}

impl<T> Default for DiGraph<T>
where
    T: Hash + Eq + Clone + Debug,
{
    fn default() -> Self {
        Self {
            adj_map: HashMap::new(),
        }
    }
}

impl<T> DiGraph<T>
where
    T: Hash + Eq + Clone + Debug,
{
    /// Inserts a directed edge from `source` to `target`.
    ///
    /// Both vertices are added to the graph if not already present.
    /// Returns `true` if the edge is new.
    pub fn add_edge(&mut self, source: T, target: T) -> bool {
        let added = self
            .adj_map
            .entry(source)
            .or_default()
            .insert(target.clone());
        self.adj_map.entry(target).or_default();
        added
    }

    /// Inserts directed edges from `source` to every vertex in `targets`.
    ///
    /// Only `source` is added as a vertex.
    pub fn add_edges<I: IntoIterator<Item = T>>(&mut self, source: T, targets: I) {
        let entry = self.adj_map.entry(source).or_default();
        entry.extend(targets);
    }

    /// Returns `true` if an edge from `source` to `target` exists.
    pub fn has_edge(&self, source: &T, target: &T) -> bool {
        self.adj_map
            .get(source)
            .is_some_and(|neighbor| neighbor.contains(target))
    }

    /// Outgoing neighbors of `source`, or `None` if it is not a vertex.
    pub fn successors(&self, source: &T) -> Option<&HashSet<T>> {
        self.adj_map.get(source)
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adj_map.values().map(HashSet::len).sum()
    }
}
