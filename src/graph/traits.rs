use std::fmt::Debug;
use std::ops::{Add, Sub};
use num_traits::{Bounded, Zero};

use crate::graph::DirectedEdge;
use crate::{Error, Result};

/// Numeric edge weight usable by every algorithm in the crate.
///
/// `Bounded::max_value()` is the "infinite distance" sentinel of shortest
/// path searches and `Bounded::min_value()` that of longest path searches.
/// Neither is ever an operand of `+`.
pub trait Weight:
    Copy + Ord + Debug + Zero + Bounded + Add<Output = Self> + Sub<Output = Self>
{
    /// `self + other` when the sum lies strictly between `min_value()` and
    /// `max_value()`, so it can neither overflow nor collide with a sentinel.
    fn bounded_add(self, other: Self) -> Option<Self> {
        if other >= Self::zero() {
            (self < Self::max_value() - other).then(|| self + other)
        } else {
            (self > Self::min_value() - other).then(|| self + other)
        }
    }
}

impl<T> Weight for T where
    T: Copy + Ord + Debug + Zero + Bounded + Add<Output = T> + Sub<Output = T>
{
}

/// Trait representing a weighted directed graph with dense vertex ids `0..vertex_count()`
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the outgoing edges of a vertex in insertion order
    fn incident_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = DirectedEdge<W>> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns the number of edges leaving a vertex
    fn out_degree(&self, vertex: usize) -> usize {
        self.incident_edges(vertex).count()
    }

    /// The single edge `source -> target`.
    ///
    /// Fails if there is no such edge or if it is not unique.
    fn unique_edge(&self, source: usize, target: usize) -> Result<DirectedEdge<W>> {
        if !self.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }
        let mut matches = self.incident_edges(source).filter(|edge| edge.target() == target);
        match (matches.next(), matches.next()) {
            (Some(edge), None) => Ok(edge),
            (None, _) => Err(Error::EdgeNotFound(source, target)),
            (Some(_), Some(_)) => Err(Error::ParallelEdges(source, target)),
        }
    }

    /// Returns every edge, grouped by source vertex
    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item = DirectedEdge<W>> + 'a>
    where
        W: 'a,
    {
        Box::new((0..self.vertex_count()).flat_map(move |v| self.incident_edges(v)))
    }
}

/// Trait for mutable graph operations
///
/// Removal reports the position the edge held in its source's adjacency list so
/// that [`ScopedEdit`](crate::graph::ScopedEdit) can put it back exactly where it was.
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Appends an edge to its source's adjacency list
    fn add_edge(&mut self, edge: DirectedEdge<W>) -> Result<()>;

    /// Removes one edge equal to `edge`, returning its former adjacency position
    fn take_edge(&mut self, edge: &DirectedEdge<W>) -> Option<usize>;

    /// Reinserts an edge at the adjacency position `take_edge` reported for it
    fn restore_edge(&mut self, position: usize, edge: DirectedEdge<W>);

    /// Removes one edge equal to `edge`; returns whether a removal occurred
    fn remove_edge(&mut self, edge: &DirectedEdge<W>) -> bool {
        self.take_edge(edge).is_some()
    }
}
