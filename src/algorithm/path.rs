use serde::{Deserialize, Serialize};

use crate::graph::{DirectedEdge, Weight};
use crate::{Error, Result};

/// A walk through the graph given by its edges, each edge's target being the
/// next edge's source.
///
/// The source vertex is stored explicitly so that the empty path at a vertex
/// (the root path of a spur at the source) is representable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectedPath<W> {
    source: usize,
    edges: Vec<DirectedEdge<W>>,
}

impl<W> DirectedPath<W>
where
    W: Weight,
{
    /// The zero-length path sitting on `vertex`
    pub fn empty(vertex: usize) -> Self {
        DirectedPath { source: vertex, edges: Vec::new() }
    }

    /// Builds a path from `source`, checking that the edges chain up
    pub fn new(source: usize, edges: Vec<DirectedEdge<W>>) -> Result<Self> {
        let mut at = source;
        for (i, edge) in edges.iter().enumerate() {
            if edge.source() != at {
                return Err(Error::BrokenPath { at: i });
            }
            at = edge.target();
        }
        Ok(DirectedPath { source, edges })
    }

    /// Builds a path starting at the first edge's source; fails on an empty list
    pub fn from_edges(edges: Vec<DirectedEdge<W>>) -> Result<Self> {
        let source = edges.first().ok_or(Error::BrokenPath { at: 0 })?.source();
        Self::new(source, edges)
    }

    pub fn source_vertex(&self) -> usize {
        self.source
    }

    pub fn target_vertex(&self) -> usize {
        self.edges.last().map_or(self.source, |edge| edge.target())
    }

    /// Sum of the edge weights, saturating at the bounds of the weight range
    pub fn distance(&self) -> W {
        self.edges.iter().fold(W::zero(), |total, edge| {
            total.bounded_add(edge.weight()).unwrap_or_else(|| {
                if edge.weight() >= W::zero() {
                    W::max_value()
                } else {
                    W::min_value()
                }
            })
        })
    }

    pub fn edges(&self) -> &[DirectedEdge<W>] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<DirectedEdge<W>> {
        self.edges
    }

    /// Vertices visited, source first; always `len() + 1` entries
    pub fn vertexes(&self) -> Vec<usize> {
        std::iter::once(self.source)
            .chain(self.edges.iter().map(|edge| edge.target()))
            .collect()
    }

    /// Number of edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn contains_edge(&self, edge: &DirectedEdge<W>) -> bool {
        self.edges.contains(edge)
    }

    /// The first `edge_count` edges of this path
    pub fn prefix(&self, edge_count: usize) -> Self {
        DirectedPath {
            source: self.source,
            edges: self.edges[..edge_count.min(self.edges.len())].to_vec(),
        }
    }

    /// Concatenates `self` and `other`; `other` must start where `self` ends
    pub fn combine(&self, other: &DirectedPath<W>) -> Result<Self> {
        if self.target_vertex() != other.source {
            return Err(Error::PathsNotAdjoining {
                left: self.target_vertex(),
                right: other.source,
            });
        }
        let mut edges = Vec::with_capacity(self.edges.len() + other.edges.len());
        edges.extend_from_slice(&self.edges);
        edges.extend_from_slice(&other.edges);
        Ok(DirectedPath { source: self.source, edges })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e(source: usize, target: usize, weight: i64) -> DirectedEdge<i64> {
        DirectedEdge::new(source, target, weight)
    }

    #[test]
    fn test_derived_attributes() {
        let path = DirectedPath::new(0, vec![e(0, 1, 2), e(1, 3, 5), e(3, 2, -1)]).unwrap();
        assert_eq!(path.source_vertex(), 0);
        assert_eq!(path.target_vertex(), 2);
        assert_eq!(path.distance(), 6);
        assert_eq!(path.vertexes(), vec![0, 1, 3, 2]);

        let empty = DirectedPath::<i64>::empty(4);
        assert_eq!(empty.target_vertex(), 4);
        assert_eq!(empty.distance(), 0);
        assert_eq!(empty.vertexes(), vec![4]);
    }

    #[test]
    fn test_rejects_discontinuous_edges() {
        assert_eq!(
            DirectedPath::new(0, vec![e(0, 1, 1), e(2, 3, 1)]),
            Err(Error::BrokenPath { at: 1 })
        );
        assert_eq!(DirectedPath::new(5, vec![e(0, 1, 1)]), Err(Error::BrokenPath { at: 0 }));
        assert_eq!(DirectedPath::<i64>::from_edges(vec![]), Err(Error::BrokenPath { at: 0 }));
    }

    #[test]
    fn test_combine_adjoining_paths() {
        let left = DirectedPath::new(0, vec![e(0, 1, 1)]).unwrap();
        let right = DirectedPath::new(1, vec![e(1, 2, 2), e(2, 3, 3)]).unwrap();
        let combined = left.combine(&right).unwrap();
        assert_eq!(combined.vertexes(), vec![0, 1, 2, 3]);
        assert_eq!(combined.distance(), 6);
        assert_eq!(combined.prefix(1), left);

        assert_eq!(
            right.combine(&left),
            Err(Error::PathsNotAdjoining { left: 3, right: 0 })
        );
        assert_eq!(DirectedPath::empty(0).combine(&left).unwrap(), left);
    }

    #[test]
    fn test_distance_saturates_instead_of_overflowing() {
        let high = DirectedPath::new(0, vec![e(0, 1, i64::MAX - 10), e(1, 2, 20)]).unwrap();
        assert_eq!(high.distance(), i64::MAX);

        let low = DirectedPath::new(0, vec![e(0, 1, i64::MIN + 10), e(1, 2, -20)]).unwrap();
        assert_eq!(low.distance(), i64::MIN);
    }
}
