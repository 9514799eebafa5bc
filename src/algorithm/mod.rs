pub mod traits;
pub mod path;
pub mod order;
pub mod acyclic;
pub mod dijkstra;
pub mod dijkstra_lazy;
pub mod dijkstra_variants;
pub mod bellman_ford;
pub mod monotonic;
pub mod all_pairs;
pub mod k_shortest;
pub mod critical_edges;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
