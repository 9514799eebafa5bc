pub mod traits;
pub mod edge;
pub mod directed;
pub mod scoped;
pub mod parse;
pub mod generators;

pub use traits::{Graph, MutableGraph, Weight};
pub use edge::DirectedEdge;
pub use directed::EdgeWeightedDigraph;
pub use scoped::ScopedEdit;
pub use parse::parse_edge_list;
