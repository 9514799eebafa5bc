use log::trace;

use crate::algorithm::traits::check_sources;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::{Graph, Weight};
use crate::Result;

/// Dijkstra's algorithm without decrease-key
///
/// Every improvement pushes a fresh `(vertex, distance)` entry; entries for
/// already visited vertices are discarded when popped. Same results as
/// [`Dijkstra`](crate::Dijkstra) at the cost of up to E queue entries.
#[derive(Debug, Default, Clone)]
pub struct DijkstraLazy;

impl DijkstraLazy {
    pub fn new() -> Self {
        DijkstraLazy
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for DijkstraLazy
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "DijkstraLazy"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        check_sources::<W, G>(graph, &[source])?;

        let n = graph.vertex_count();
        let mut result = ShortestPathResult::init(n, &[source]);
        let mut visited = vec![false; n];
        let mut queue = BinaryHeapWrapper::new();
        queue.push(source, W::zero());

        let mut stale = 0usize;
        while let Some((vertex, _)) = queue.pop() {
            if visited[vertex] {
                stale += 1;
                continue;
            }
            visited[vertex] = true;

            for edge in graph.incident_edges(vertex) {
                if visited[edge.target()] {
                    continue;
                }
                if result.relax(&edge) {
                    queue.push(edge.target(), result.distance_to(edge.target())?);
                }
            }
        }

        trace!("lazy dijkstra discarded {} stale entries", stale);
        Ok(result)
    }
}
