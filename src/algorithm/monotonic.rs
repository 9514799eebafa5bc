use std::cmp::Ordering;

use crate::algorithm::path::DirectedPath;
use crate::algorithm::traits::check_sources;
use crate::graph::{DirectedEdge, Graph, Weight};
use crate::{Error, Result};

/// Required ordering of edge weights along a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Monotonic {
    /// Each edge strictly heavier than the previous one
    Increasing,
    /// Each edge strictly lighter than the previous one
    Decreasing,
}

/// Shortest paths restricted to strictly monotonic edge weights
///
/// Edges are processed in the required weight order, one group of equal
/// weights at a time. The best path ending in an edge extends the best path
/// into the edge's source among edges of earlier groups only, which keeps the
/// ordering strict. Parent pointers are kept per edge, not per vertex,
/// because the best path into a vertex can change after it was extended.
#[derive(Debug, Clone)]
pub struct MonotonicShortestPaths {
    direction: Monotonic,
}

impl MonotonicShortestPaths {
    pub fn new(direction: Monotonic) -> Self {
        MonotonicShortestPaths { direction }
    }

    pub fn compute<W, G>(&self, graph: &G, source: usize) -> Result<MonotonicPaths<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        check_sources::<W, G>(graph, &[source])?;

        let mut edges: Vec<DirectedEdge<W>> = graph.edges().collect();
        match self.direction {
            Monotonic::Increasing => edges.sort_by(|a, b| a.weight().cmp(&b.weight())),
            Monotonic::Decreasing => edges.sort_by(|a, b| b.weight().cmp(&a.weight())),
        }

        let n = graph.vertex_count();
        // Best (distance, final edge) into each vertex over finished groups
        let mut best_into: Vec<Option<(W, usize)>> = vec![None; n];
        let mut through_edge: Vec<Option<W>> = vec![None; edges.len()];
        let mut parent: Vec<Option<usize>> = vec![None; edges.len()];

        let mut start = 0;
        while start < edges.len() {
            let weight = edges[start].weight();
            let end = edges[start..]
                .iter()
                .position(|edge| edge.weight().cmp(&weight) != Ordering::Equal)
                .map_or(edges.len(), |offset| start + offset);

            for i in start..end {
                let from = edges[i].source();
                let mut base = (from == source).then_some((W::zero(), None));
                if let Some((distance, last)) = best_into[from] {
                    if base.map_or(true, |(current, _)| distance < current) {
                        base = Some((distance, Some(last)));
                    }
                }
                if let Some((distance, last)) = base {
                    if let Some(total) = distance.bounded_add(edges[i].weight()) {
                        through_edge[i] = Some(total);
                        parent[i] = last;
                    }
                }
            }

            for i in start..end {
                if let Some(distance) = through_edge[i] {
                    let to = edges[i].target();
                    if best_into[to].map_or(true, |(current, _)| distance < current) {
                        best_into[to] = Some((distance, i));
                    }
                }
            }

            start = end;
        }

        Ok(MonotonicPaths {
            source,
            edges,
            parent,
            best_into,
        })
    }
}

/// Result of [`MonotonicShortestPaths`]
#[derive(Debug, Clone)]
pub struct MonotonicPaths<W> {
    source: usize,
    edges: Vec<DirectedEdge<W>>,
    parent: Vec<Option<usize>>,
    best_into: Vec<Option<(W, usize)>>,
}

impl<W> MonotonicPaths<W>
where
    W: Weight,
{
    pub fn source(&self) -> usize {
        self.source
    }

    pub fn has_path_to(&self, vertex: usize) -> bool {
        vertex == self.source || self.best_into.get(vertex).map_or(false, Option::is_some)
    }

    /// Weight of the best monotonic path; the source is at zero
    pub fn distance_to(&self, vertex: usize) -> Result<W> {
        if vertex >= self.best_into.len() {
            return Err(Error::InvalidVertex(vertex));
        }
        if vertex == self.source {
            return Ok(W::zero());
        }
        self.best_into[vertex]
            .map(|(distance, _)| distance)
            .ok_or(Error::NoPath(vertex))
    }

    pub fn path_to(&self, vertex: usize) -> Result<DirectedPath<W>> {
        self.distance_to(vertex)?;
        if vertex == self.source {
            return Ok(DirectedPath::empty(vertex));
        }

        let mut stack = Vec::new();
        let mut current = self.best_into[vertex].map(|(_, edge)| edge);
        while let Some(index) = current {
            stack.push(self.edges[index]);
            current = self.parent[index];
        }
        stack.reverse();
        DirectedPath::new(self.source, stack)
    }

    pub fn edges_of_path_to(&self, vertex: usize) -> Result<Vec<DirectedEdge<W>>> {
        self.path_to(vertex).map(DirectedPath::into_edges)
    }
}
