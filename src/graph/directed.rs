use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::graph::DirectedEdge;
use crate::{Error, Result};

/// An edge-weighted directed graph implementation using adjacency lists
///
/// Parallel edges and self-loops are allowed. The vertex set is fixed at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeWeightedDigraph<W>
where
    W: Weight,
{
    /// Outgoing edges for each vertex, in insertion order
    adjacency: Vec<Vec<DirectedEdge<W>>>,

    /// Total number of edges across all adjacency lists
    edge_count: usize,
}

impl<W> EdgeWeightedDigraph<W>
where
    W: Weight,
{
    /// Creates a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Self {
        EdgeWeightedDigraph {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Creates a graph from `(source, target, weight)` triples
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::new(vertex_count);
        for (source, target, weight) in edges {
            graph.add_weighted_edge(source, target, weight)?;
        }
        Ok(graph)
    }

    /// Adds the edge `source -> target` with the given weight
    pub fn add_weighted_edge(&mut self, source: usize, target: usize, weight: W) -> Result<()> {
        self.add_edge(DirectedEdge::new(source, target, weight))
    }

    /// Outgoing edges of `vertex` as a slice; empty for unknown vertices
    pub fn adjacent(&self, vertex: usize) -> &[DirectedEdge<W>] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of edges pointing into `vertex`. O(E).
    pub fn in_degree(&self, vertex: usize) -> usize {
        self.adjacency
            .iter()
            .flatten()
            .filter(|edge| edge.target() == vertex)
            .count()
    }

    /// All edges with `vertex` as source or target, self-loops reported once
    pub fn edges_touching(&self, vertex: usize) -> Vec<DirectedEdge<W>> {
        self.adjacency
            .iter()
            .flatten()
            .filter(|edge| edge.touches(vertex))
            .copied()
            .collect()
    }

    /// A copy of the graph with every edge reversed
    pub fn reverse(&self) -> Self {
        let mut reversed = Self::new(self.vertex_count());
        for edge in self.adjacency.iter().flatten() {
            reversed.adjacency[edge.target()].push(edge.reversed());
        }
        reversed.edge_count = self.edge_count;
        reversed
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.adjacency
            .iter()
            .flatten()
            .all(|edge| edge.weight() >= W::zero())
    }

    /// Appends an edge whose endpoints are already known to be vertices
    pub(crate) fn push_edge(&mut self, edge: DirectedEdge<W>) {
        self.adjacency[edge.source()].push(edge);
        self.edge_count += 1;
    }
}

impl<W> Graph<W> for EdgeWeightedDigraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn incident_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = DirectedEdge<W>> + '_> {
        Box::new(self.adjacent(vertex).iter().copied())
    }

    fn out_degree(&self, vertex: usize) -> usize {
        self.adjacent(vertex).len()
    }
}

impl<W> MutableGraph<W> for EdgeWeightedDigraph<W>
where
    W: Weight,
{
    fn add_edge(&mut self, edge: DirectedEdge<W>) -> Result<()> {
        for vertex in [edge.source(), edge.target()] {
            if !self.has_vertex(vertex) {
                return Err(Error::InvalidVertex(vertex));
            }
        }
        self.push_edge(edge);
        Ok(())
    }

    fn take_edge(&mut self, edge: &DirectedEdge<W>) -> Option<usize> {
        let edges = self.adjacency.get_mut(edge.source())?;
        let position = edges.iter().position(|candidate| candidate == edge)?;
        // Vec::remove keeps the remaining edges in insertion order
        edges.remove(position);
        self.edge_count -= 1;
        Some(position)
    }

    fn restore_edge(&mut self, position: usize, edge: DirectedEdge<W>) {
        let edges = &mut self.adjacency[edge.source()];
        let position = position.min(edges.len());
        edges.insert(position, edge);
        self.edge_count += 1;
    }
}
