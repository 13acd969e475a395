mod common;

use common::{abc_chain, id};
use hashbrown::HashSet;
use paradox_core::{Error, ErrorKind, Identifier, TemporalGraph};

fn neighbor_set(graph: &TemporalGraph, of: &Identifier) -> HashSet<Identifier> {
    graph
        .neighbors(of)
        .unwrap()
        .into_iter()
        .map(|node| node.id().clone())
        .collect()
}

#[test]
fn chain_adjacency() {
    let graph = abc_chain();
    assert_eq!(graph.node_count(), 9);

    assert_eq!(
        neighbor_set(&graph, &id("a", 0)),
        [id("a", 1), id("b", 1)].into()
    );
    assert_eq!(
        neighbor_set(&graph, &id("b", 1)),
        [id("b", 0), id("b", 2), id("c", 2)].into()
    );
    assert_eq!(
        neighbor_set(&graph, &id("c", 2)),
        [id("c", 0), id("c", 1)].into()
    );
}

#[test]
fn every_location_has_its_tick_chain() {
    let mut graph = TemporalGraph::new(-2, 3).unwrap();
    for name in ["x", "y", "z", "w"] {
        graph.create_node(name).unwrap();
    }
    assert_eq!(graph.node_count(), 4 * 6);

    for name in ["x", "y", "z", "w"] {
        for t in -2..=3 {
            let ids = graph.neighbor_ids(&id(name, t)).unwrap();
            let mut expected: HashSet<Identifier> = (-2..t).map(|past| id(name, past)).collect();
            if t != 3 {
                expected.insert(id(name, t + 1));
            }
            assert_eq!(ids, &expected, "{name} at {t}");
            assert!(!ids.contains(&id(name, t)), "self-loop at ({name}, {t})");
        }
    }
}

#[test]
fn direct_edge_spans_every_tick_but_the_last() {
    let mut graph = TemporalGraph::new(0, 4).unwrap();
    graph.create_node("a").unwrap();
    graph.create_node("b").unwrap();
    let before = graph.edge_count();

    graph.direct_edge("a", "b").unwrap();
    assert_eq!(graph.edge_count(), before + 4);
    for t in 0..4 {
        assert!(graph.has_edge(&id("a", t), &id("b", t + 1)));
        assert!(!graph.has_edge(&id("b", t), &id("a", t + 1)));
    }

    graph.direct_edge("a", "b").unwrap();
    assert_eq!(graph.edge_count(), before + 4);
}

#[test]
fn set_current() {
    let mut graph = abc_chain();
    graph.set_current(("a", 1)).unwrap();
    assert_eq!(graph.current(), Some(&id("a", 1)));

    let err = graph.set_current(("foobar", 0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lookup);
    assert_eq!(graph.current(), Some(&id("a", 1)));
}

#[test]
fn duplicate_location_leaves_graph_unchanged() {
    let mut graph = abc_chain();
    let before = graph.clone();

    let err = graph.create_node("a").unwrap_err();
    assert_eq!(err, Error::DuplicateLocation("a".into()));
    assert_eq!(err.kind(), ErrorKind::Duplicate);
    assert_eq!(graph, before);
}

#[test]
fn unregistered_direct_edge_endpoint_is_a_lookup_failure() {
    let mut graph = abc_chain();
    let before = graph.clone();

    let err = graph.direct_edge("c", "nowhere").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lookup);
    assert_eq!(graph, before);
}
