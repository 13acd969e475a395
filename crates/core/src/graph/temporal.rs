use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};

use crate::consistency::{self, SearchOptions};
use crate::error::Error;
use crate::graph::digraph::DiGraph;
use crate::graph::identifier::Identifier;
use crate::graph::node::Node;

/// Locations replicated over a closed tick range, with the edges a walker
/// may take between them.
///
/// Every registered location has one [`Node`] per tick in `[start, end]`.
/// Within a location a walker may step forward one tick or jump back to any
/// earlier tick; [`direct_edge`](Self::direct_edge) adds forward steps across
/// locations.
///
/// `Clone` is a deep copy.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporalGraph {
    start: i64,
    end: i64,
    #[cfg_attr(feature = "serde", serde(with = "crate::graph::pairs"))]
    nodes: HashMap<Identifier, Node>,
    edges: DiGraph<Identifier>,
    names: BTreeSet<String>,
    current: Option<Identifier>,
}

impl TemporalGraph {
    /// Creates an empty graph over the ticks `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `start > end`.
    pub fn new(start: i64, end: i64) -> Result<Self, Error> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Self {
            start,
            end,
            nodes: HashMap::new(),
            edges: DiGraph::default(),
            names: BTreeSet::new(),
            current: None,
        })
    }

    #[must_use]
    pub const fn start(&self) -> i64 {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> i64 {
        self.end
    }

    /// Registers location `name` and creates its nodes for every tick.
    ///
    /// `(name, t)` gets an edge to every earlier tick of `name` and, unless
    /// `t` is the last tick, to `(name, t + 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateLocation`] if `name` is already registered.
    pub fn create_node(&mut self, name: impl Into<String>) -> Result<(), Error> {
        let name = name.into();
        if self.names.contains(&name) {
            return Err(Error::DuplicateLocation(name));
        }

        for t in self.start..=self.end {
            let id = Identifier::new(name.as_str(), t);
            let earlier = (self.start..t).map(|past| Identifier::new(name.as_str(), past));
            self.edges.add_edges(id.clone(), earlier);
            if t != self.end {
                self.edges
                    .add_edges(id.clone(), [Identifier::new(name.as_str(), t + 1)]);
            }
            self.nodes.insert(id.clone(), Node::new(id));
        }

        tracing::debug!(location = %name, ticks = self.end - self.start + 1, "created location");
        self.names.insert(name);
        Ok(())
    }

    /// Adds the forward step `(from, t) -> (to, t + 1)` for every tick but
    /// the last. Calling it again for the same pair changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLocation`] if either name is not registered;
    /// no edge is added in that case.
    pub fn direct_edge(&mut self, from: &str, to: &str) -> Result<(), Error> {
        for name in [from, to] {
            if !self.names.contains(name) {
                return Err(Error::UnknownLocation(name.into()));
            }
        }

        let mut added = 0_usize;
        for t in self.start..self.end {
            if self
                .edges
                .add_edge(Identifier::new(from, t), Identifier::new(to, t + 1))
            {
                added += 1;
            }
        }

        tracing::debug!(from, to, added, "directed edge");
        Ok(())
    }

    /// Moves the search start to `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownIdentifier`] if there is no node for `id`.
    pub fn set_current(&mut self, id: impl Into<Identifier>) -> Result<(), Error> {
        let id = id.into();
        if !self.nodes.contains_key(&id) {
            return Err(Error::UnknownIdentifier(id));
        }
        tracing::debug!(current = %id, "set current node");
        self.current = Some(id);
        Ok(())
    }

    #[must_use]
    pub const fn current(&self) -> Option<&Identifier> {
        self.current.as_ref()
    }

    /// # Errors
    ///
    /// Returns [`Error::UnknownIdentifier`] if there is no node for `id`.
    pub fn node(&self, id: &Identifier) -> Result<&Node, Error> {
        self.nodes
            .get(id)
            .ok_or_else(|| Error::UnknownIdentifier(id.clone()))
    }

    /// # Errors
    ///
    /// Returns [`Error::UnknownIdentifier`] if there is no node for `id`.
    pub fn node_mut(&mut self, id: &Identifier) -> Result<&mut Node, Error> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| Error::UnknownIdentifier(id.clone()))
    }

    /// Identifiers reachable from `id` in one step, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownIdentifier`] if there is no node for `id`.
    pub fn neighbor_ids(&self, id: &Identifier) -> Result<&HashSet<Identifier>, Error> {
        self.edges
            .successors(id)
            .ok_or_else(|| Error::UnknownIdentifier(id.clone()))
    }

    /// Nodes reachable from `id` in one step, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownIdentifier`] if there is no node for `id`.
    pub fn neighbors(&self, id: &Identifier) -> Result<Vec<&Node>, Error> {
        self.neighbor_ids(id)?
            .iter()
            .map(|neighbor| self.node(neighbor))
            .collect()
    }

    #[must_use]
    pub fn has_edge(&self, source: &Identifier, target: &Identifier) -> bool {
        self.edges.has_edge(source, target)
    }

    #[must_use]
    pub fn has_location(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Registered location names, sorted.
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.edge_count()
    }

    /// Nodes whose `variable` is [`Occupied`](crate::State::Occupied).
    #[must_use]
    pub fn targets(&self, variable: &str) -> HashSet<Identifier> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.get(variable).is_target())
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Whether one simple path from the current node covers every node
    /// where `variable` is occupied without entering a node where it is
    /// empty or visited.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCurrentPosition`] if no current node is set.
    pub fn is_consistent(&self, variable: &str) -> Result<bool, Error> {
        self.is_consistent_with(variable, SearchOptions::default())
    }

    /// [`is_consistent`](Self::is_consistent) with explicit search options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCurrentPosition`] if no current node is set.
    pub fn is_consistent_with(&self, variable: &str, options: SearchOptions) -> Result<bool, Error> {
        self.find_path_with(variable, options).map(|path| path.is_some())
    }

    /// Like [`is_consistent`](Self::is_consistent), returning the covering
    /// path (starting at the current node) when one exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCurrentPosition`] if no current node is set.
    pub fn find_path(&self, variable: &str) -> Result<Option<Vec<Identifier>>, Error> {
        self.find_path_with(variable, SearchOptions::default())
    }

    /// [`find_path`](Self::find_path) with explicit search options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCurrentPosition`] if no current node is set.
    pub fn find_path_with(
        &self,
        variable: &str,
        options: SearchOptions,
    ) -> Result<Option<Vec<Identifier>>, Error> {
        consistency::find_covering_path(self, variable, options)
    }
}
