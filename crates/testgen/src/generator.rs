use paradox_core::{Error, Identifier, State, TemporalGraph};
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use typed_builder::TypedBuilder;

/// Variable the generator marks.
pub const VARIABLE: &str = "agent";

#[derive(Clone, Debug, TypedBuilder)]
pub struct WorldParams {
    #[builder(default)]
    pub seed: u64,
    pub n_location: u64,
    /// Ticks run over `0..=last_tick`.
    pub last_tick: i64,
    /// Chance that an ordered pair of distinct locations gets a direct edge.
    #[builder(default = 0.3)]
    pub edge_probability: f64,
    #[builder(default = 2)]
    pub n_occupied: u64,
    #[builder(default = 2)]
    pub n_blocked: u64,
}

/// Generate one world from `params`.
///
/// Locations are named `l0`, `l1`, ... The current node is a random node
/// marked [`State::Visited`] for [`VARIABLE`], the way a host marks the
/// walker's own position. Then `n_occupied` random nodes are marked
/// occupied and `n_blocked` random nodes are marked empty or visited; later
/// marks overwrite earlier ones, so fewer distinct nodes may end up marked.
/// The same params always produce the same world.
///
/// # Errors
///
/// Propagates graph construction errors, e.g. [`Error::InvalidRange`] for a
/// negative `last_tick`.
///
/// # Panics
///
/// Panics if `n_location` is zero (cannot create a uniform distribution over
/// an empty range).
pub fn generate_world(params: &WorldParams) -> Result<TemporalGraph, Error> {
    let mut random_generator = StdRng::seed_from_u64(params.seed);
    let mut graph = TemporalGraph::new(0, params.last_tick)?;

    let names: Vec<String> = (0..params.n_location).map(|i| format!("l{i}")).collect();
    for name in &names {
        graph.create_node(name.as_str())?;
    }
    for from in &names {
        for to in &names {
            if from != to && random_generator.random_bool(params.edge_probability) {
                graph.direct_edge(from, to)?;
            }
        }
    }

    let location_range = Uniform::new(0, names.len()).unwrap();
    let random_node = |random_generator: &mut StdRng| {
        let location = &names[location_range.sample(random_generator)];
        let tick = random_generator.random_range(0..=params.last_tick);
        Identifier::new(location.as_str(), tick)
    };

    let current = random_node(&mut random_generator);
    graph.node_mut(&current)?.set(VARIABLE, State::Visited)?;
    graph.set_current(current)?;

    for _ in 0..params.n_occupied {
        let id = random_node(&mut random_generator);
        graph.node_mut(&id)?.set(VARIABLE, State::Occupied)?;
    }
    for _ in 0..params.n_blocked {
        let id = random_node(&mut random_generator);
        let state = if random_generator.random::<bool>() {
            State::Empty
        } else {
            State::Visited
        };
        graph.node_mut(&id)?.set(VARIABLE, state)?;
    }

    tracing::debug!(
        seed = params.seed,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "generated world"
    );
    Ok(graph)
}

/// Generate `n_world` worlds, using seeds `params.seed..params.seed + n_world`.
///
/// # Errors
///
/// See [`generate_world`].
pub fn generate_mult_worlds(n_world: u64, params: &WorldParams) -> Result<Vec<TemporalGraph>, Error> {
    (0..n_world)
        .into_par_iter()
        .map(|i| {
            let mut params = params.clone();
            params.seed = params.seed.wrapping_add(i);
            generate_world(&params)
        })
        .collect()
}
