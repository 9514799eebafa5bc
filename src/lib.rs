//! Shortest Paths - single-source shortest paths on edge-weighted digraphs
//!
//! This library implements the classical shortest-path family over a mutable
//! adjacency-list digraph: Dijkstra (indexed and lazy priority queues, plus
//! early-terminating source/sink variants), queue-based Bellman-Ford with
//! negative-cycle detection, single-pass relaxation in topological order for
//! DAGs, and Yen's k-shortest-paths enumeration built on top of them.
//!
//! Every algorithm is generic over a [`Weight`](graph::Weight) and computes its
//! answer eagerly into an immutable [`ShortestPathResult`], which is then
//! queried for distances and paths.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    acyclic::{AcyclicLongestPaths, AcyclicShortestPaths},
    all_pairs::AllPairsShortestPaths,
    bellman_ford::BellmanFord,
    critical_edges::ShortestPathCriticalEdges,
    dijkstra::Dijkstra,
    dijkstra_lazy::DijkstraLazy,
    dijkstra_variants::{DijkstraMultiSource, DijkstraSets, DijkstraSourceSink},
    k_shortest::{KShortestPaths, OverlappingYens, YenEnumerator},
    monotonic::{Monotonic, MonotonicShortestPaths},
    path::DirectedPath,
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{DirectedEdge, EdgeWeightedDigraph, Graph, MutableGraph, ScopedEdit, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Source vertex {0} not found in graph")]
    SourceNotFound(usize),

    #[error("No path to vertex {0}")]
    NoPath(usize),

    #[error("Negative edge weight on edge from {from} to {to}")]
    NegativeWeight { from: usize, to: usize },

    #[error("No edge from {0} to {1}")]
    EdgeNotFound(usize, usize),

    #[error("More than one edge from {0} to {1}")]
    ParallelEdges(usize, usize),

    #[error("Index {0} is outside the queue capacity")]
    IndexOutOfRange(usize),

    #[error("Index {0} is already in the queue")]
    DuplicateIndex(usize),

    #[error("Index {0} is not in the queue")]
    MissingIndex(usize),

    #[error("Priority queue is empty")]
    EmptyQueue,

    #[error("Graph contains a directed cycle")]
    CycleDetected,

    #[error("Path reconstruction ran into a negative cycle")]
    NegativeCycle,

    #[error("Cannot combine a path ending at {left} with a path starting at {right}")]
    PathsNotAdjoining { left: usize, right: usize },

    #[error("Edges do not form a path: discontinuity at edge {at}")]
    BrokenPath { at: usize },

    #[error("No path of rank {0}")]
    NoSuchRank(usize),

    #[error("Malformed edge list: {0}")]
    Parse(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
