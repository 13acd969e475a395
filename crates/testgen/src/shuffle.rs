use std::cell::RefCell;

use paradox_core::consistency::{CoverageSearch, SearchOptions, VariableView};
use paradox_core::{Identifier, TemporalGraph};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// A [`VariableView`] whose successor order is shuffled on every call.
///
/// Running the search through it must give the same answer as the
/// unshuffled view; it exists to catch order-dependent search bugs.
pub struct ShuffledView<'g> {
    inner: VariableView<'g>,
    random_generator: RefCell<StdRng>,
}

impl<'g> ShuffledView<'g> {
    #[must_use]
    pub fn new(graph: &'g TemporalGraph, variable: &'g str, seed: u64) -> Self {
        Self {
            inner: VariableView::new(graph, variable, SearchOptions::default()),
            random_generator: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl CoverageSearch for ShuffledView<'_> {
    type Vertex = Identifier;

    fn successors(&self, source: &Identifier) -> Vec<Identifier> {
        let mut successors = self.inner.successors(source);
        successors.shuffle(&mut *self.random_generator.borrow_mut());
        successors
    }

    fn is_blocked(&self, v: &Identifier) -> bool {
        self.inner.is_blocked(v)
    }
}
