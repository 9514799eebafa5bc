use std::marker::PhantomData;

use crate::graph::traits::{MutableGraph, Weight};
use crate::graph::DirectedEdge;

/// Exclusive, temporary edit of a graph that only removes edges.
///
/// Every removal is recorded together with the adjacency position it came
/// from. Dropping the edit (normally, on an early return, or on `?`) puts the
/// edges back in reverse order of removal, which reproduces the original
/// adjacency lists exactly.
#[derive(Debug)]
pub struct ScopedEdit<'g, W, G>
where
    W: Weight,
    G: MutableGraph<W>,
{
    graph: &'g mut G,
    removed: Vec<(usize, DirectedEdge<W>)>,
    _weight_marker: PhantomData<W>,
}

impl<'g, W, G> ScopedEdit<'g, W, G>
where
    W: Weight,
    G: MutableGraph<W>,
{
    pub fn new(graph: &'g mut G) -> Self {
        ScopedEdit {
            graph,
            removed: Vec::new(),
            _weight_marker: PhantomData,
        }
    }

    /// Read access to the graph in its current, edited state
    pub fn graph(&self) -> &G {
        self.graph
    }

    /// Removes one edge equal to `edge`; returns whether it was present
    pub fn remove_edge(&mut self, edge: &DirectedEdge<W>) -> bool {
        match self.graph.take_edge(edge) {
            Some(position) => {
                self.removed.push((position, *edge));
                true
            }
            None => false,
        }
    }

    /// Removes every edge entering or leaving `vertex`, returning how many went
    pub fn isolate_vertex(&mut self, vertex: usize) -> usize {
        let touching: Vec<DirectedEdge<W>> = self
            .graph
            .edges()
            .filter(|edge| edge.touches(vertex))
            .collect();
        touching
            .iter()
            .filter(|edge| self.remove_edge(edge))
            .count()
    }

    /// Edges removed so far, in removal order
    pub fn removed_edges(&self) -> impl Iterator<Item = &DirectedEdge<W>> + '_ {
        self.removed.iter().map(|(_, edge)| edge)
    }

    /// Number of edges currently removed
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}

impl<W, G> Drop for ScopedEdit<'_, W, G>
where
    W: Weight,
    G: MutableGraph<W>,
{
    fn drop(&mut self) {
        while let Some((position, edge)) = self.removed.pop() {
            self.graph.restore_edge(position, edge);
        }
    }
}
