use log::trace;

use crate::algorithm::traits::check_sources;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::IndexedPriorityQueue;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm driven by an indexed priority queue
///
/// Requires non-negative weights; negative weights are not checked and give
/// wrong distances. Every reachable vertex is extracted exactly once and its
/// distance is final at that moment.
#[derive(Debug, Default, Clone)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let search = Settle {
            sources: &[source],
            reject_negative: false,
        };
        search.run(graph, |_| false).map(|(result, _)| result)
    }
}

/// One Dijkstra run shared by the plain and the early-terminating variants
pub(crate) struct Settle<'a> {
    /// Vertices starting at distance zero
    pub(crate) sources: &'a [usize],

    /// Fail with `NegativeWeight` when a negative edge is scanned
    pub(crate) reject_negative: bool,
}

impl Settle<'_> {
    /// Settles vertices in distance order until the queue empties or `stop`
    /// accepts a settled vertex, which is then returned alongside the result.
    ///
    /// Once a vertex is extracted no later relaxation can improve it, so
    /// stopping there leaves its distance and path final.
    pub(crate) fn run<W, G, F>(
        &self,
        graph: &G,
        mut stop: F,
    ) -> Result<(ShortestPathResult<W>, Option<usize>)>
    where
        W: Weight,
        G: Graph<W>,
        F: FnMut(usize) -> bool,
    {
        check_sources::<W, G>(graph, self.sources)?;

        let n = graph.vertex_count();
        let mut result = ShortestPathResult::init(n, self.sources);
        let mut queue = IndexedPriorityQueue::new(n);
        let mut settled = vec![false; n];
        for &source in self.sources {
            queue.insert_or_decrease(source, W::zero())?;
        }

        while !queue.is_empty() {
            let (vertex, distance) = queue.pop_min()?;
            settled[vertex] = true;
            trace!("settled vertex {} at {:?}", vertex, distance);
            if stop(vertex) {
                return Ok((result, Some(vertex)));
            }

            for edge in graph.incident_edges(vertex) {
                if self.reject_negative && edge.weight() < W::zero() {
                    return Err(Error::NegativeWeight {
                        from: edge.source(),
                        to: edge.target(),
                    });
                }
                // A settled distance is final; this also bounds the work on negative cycles
                if settled[edge.target()] {
                    continue;
                }
                if result.relax(&edge) {
                    let target = edge.target();
                    let improved = result.distance_to(target)?;
                    if queue.contains(target) {
                        queue.update_value(target, improved)?;
                    } else {
                        queue.insert(target, improved)?;
                    }
                }
            }
        }

        Ok((result, None))
    }
}
