use log::debug;

use crate::algorithm::dijkstra_variants::DijkstraSourceSink;
use crate::algorithm::path::DirectedPath;
use crate::graph::{DirectedEdge, MutableGraph, ScopedEdit, Weight};
use crate::Result;

/// How much the source-target distance suffers without each edge of the shortest path
///
/// Each edge of the shortest path is removed in turn inside a [`ScopedEdit`]
/// and the pair is re-solved; the graph is unchanged afterwards.
#[derive(Debug, Default, Clone)]
pub struct ShortestPathCriticalEdges;

impl ShortestPathCriticalEdges {
    pub fn new() -> Self {
        ShortestPathCriticalEdges
    }

    /// Fails with `NoPath` if `target` is unreachable from `source`
    pub fn compute<W, G>(
        &self,
        graph: &mut G,
        source: usize,
        target: usize,
    ) -> Result<CriticalEdgeReport<W>>
    where
        W: Weight,
        G: MutableGraph<W>,
    {
        let solver = DijkstraSourceSink::new();
        let shortest = solver.compute(&*graph, source, target)?.path_to(target)?;

        let mut impacts = Vec::with_capacity(shortest.len());
        for edge in shortest.edges() {
            let mut edit = ScopedEdit::new(&mut *graph);
            edit.remove_edge(edge);
            let without = solver.compute(edit.graph(), source, target)?;
            let distance = without.distance_to(target).ok();
            debug!("without {}: {:?}", edge, distance);
            impacts.push(EdgeImpact {
                edge: *edge,
                distance_without: distance,
            });
        }

        Ok(CriticalEdgeReport { shortest, impacts })
    }
}

/// Effect of removing a single edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeImpact<W> {
    pub edge: DirectedEdge<W>,
    /// Shortest distance without the edge, `None` if the target becomes unreachable
    pub distance_without: Option<W>,
}

/// Result of [`ShortestPathCriticalEdges`]
#[derive(Debug, Clone)]
pub struct CriticalEdgeReport<W> {
    shortest: DirectedPath<W>,
    impacts: Vec<EdgeImpact<W>>,
}

impl<W> CriticalEdgeReport<W>
where
    W: Weight,
{
    /// The shortest path the edges were taken from
    pub fn shortest_path(&self) -> &DirectedPath<W> {
        &self.shortest
    }

    /// One entry per edge of the shortest path, in path order
    pub fn impacts(&self) -> &[EdgeImpact<W>] {
        &self.impacts
    }

    /// Edges whose removal lengthens the shortest path or disconnects the target
    pub fn critical(&self) -> impl Iterator<Item = &EdgeImpact<W>> + '_ {
        let base = self.shortest.distance();
        self.impacts
            .iter()
            .filter(move |impact| impact.distance_without.map_or(true, |d| d > base))
    }

    /// The edge whose removal hurts most; disconnection beats any distance
    pub fn most_critical(&self) -> Option<&EdgeImpact<W>> {
        self.critical()
            .max_by_key(|impact| impact.distance_without.unwrap_or_else(W::max_value))
    }
}
