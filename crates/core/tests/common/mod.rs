#![allow(dead_code)]

use paradox_core::{Identifier, TemporalGraph};

pub fn id(location: &str, tick: i64) -> Identifier {
    Identifier::new(location, tick)
}

/// Ticks `0..=2`, locations `a`, `b`, `c`, with `a -> b` and `b -> c`.
pub fn abc_chain() -> TemporalGraph {
    let mut graph = TemporalGraph::new(0, 2).unwrap();
    for name in ["a", "b", "c"] {
        graph.create_node(name).unwrap();
    }
    graph.direct_edge("a", "b").unwrap();
    graph.direct_edge("b", "c").unwrap();
    graph
}

/// DSL macro for marking a variable on several nodes.
///
/// # Syntax
///
/// ```ignore
/// mark!(graph, "agent", {
///     (a, 0) => Visited,
///     (b, 2) => Occupied,
/// });
/// ```
#[macro_export]
macro_rules! mark {
    ($graph:expr, $variable:expr, { $(($loc:ident, $tick:expr) => $state:ident),* $(,)? }) => {
        $(
            $graph
                .node_mut(&paradox_core::Identifier::new(stringify!($loc), $tick))
                .unwrap()
                .set($variable, paradox_core::State::$state)
                .unwrap();
        )*
    };
}
