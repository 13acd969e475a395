pub mod digraph;
pub mod identifier;
pub mod node;
#[cfg(feature = "serde")]
mod pairs;
pub mod temporal;

pub use identifier::Identifier;
pub use node::Node;
pub use temporal::TemporalGraph;
