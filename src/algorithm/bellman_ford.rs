use std::collections::VecDeque;

use log::{debug, trace};

use crate::algorithm::order::DirectedCycle;
use crate::algorithm::traits::check_sources;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{DirectedEdge, EdgeWeightedDigraph, Graph, MutableGraph, Weight};
use crate::Result;

/// Queue-based Bellman-Ford: arbitrary weights, negative-cycle detection
///
/// Only vertices whose distance changed are re-scanned. After every V scanned
/// edges the current shortest path tree is checked for a cycle; any cycle in
/// that tree is negative. When one is found relaxation stops,
/// [`ShortestPathResult::has_negative_cycle`] becomes true and distances of
/// vertices reachable through the cycle are meaningless.
#[derive(Debug, Default, Clone)]
pub struct BellmanFord {
    /// Skip a dequeued vertex whose parent is itself waiting in the queue
    parent_check: bool,
}

impl BellmanFord {
    pub fn new() -> Self {
        BellmanFord::default()
    }

    /// Enables the parent-checking heuristic.
    ///
    /// A vertex whose tree parent is still queued will be improved again when
    /// the parent is scanned, so scanning it now is wasted work. Results are
    /// unchanged.
    pub fn with_parent_check(mut self, enabled: bool) -> Self {
        self.parent_check = enabled;
        self
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        if self.parent_check {
            "BellmanFordParentCheck"
        } else {
            "BellmanFord"
        }
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        check_sources::<W, G>(graph, &[source])?;

        let n = graph.vertex_count();
        let mut result = ShortestPathResult::init(n, &[source]);
        let mut on_queue = vec![false; n];
        let mut queue = VecDeque::with_capacity(n);
        queue.push_back(source);
        on_queue[source] = true;

        let mut scanned = 0usize;
        let mut skipped = 0usize;
        while let Some(vertex) = queue.pop_front() {
            on_queue[vertex] = false;

            if self.parent_check {
                if let Some(parent) = result.edge_to(vertex) {
                    if on_queue[parent.source()] {
                        skipped += 1;
                        continue;
                    }
                }
            }

            for edge in graph.incident_edges(vertex) {
                let target = edge.target();
                if result.relax(&edge) && !on_queue[target] {
                    queue.push_back(target);
                    on_queue[target] = true;
                }

                scanned += 1;
                if scanned % n == 0 {
                    if let Some(cycle) = find_negative_cycle(&result, n)? {
                        debug!(
                            "negative cycle of {} edges found after {} edge scans",
                            cycle.len(),
                            scanned
                        );
                        result.set_negative_cycle(cycle);
                        return Ok(result);
                    }
                }
            }
        }

        trace!("bellman-ford scanned {} edges, skipped {} vertices", scanned, skipped);
        Ok(result)
    }
}

/// Looks for a cycle in the graph formed by the current parent edges
fn find_negative_cycle<W>(
    result: &ShortestPathResult<W>,
    n: usize,
) -> Result<Option<Vec<DirectedEdge<W>>>>
where
    W: Weight,
{
    let mut tree = EdgeWeightedDigraph::new(n);
    for edge in result.tree_edges().iter().flatten() {
        tree.add_edge(*edge)?;
    }
    Ok(DirectedCycle::new(&tree).into_cycle())
}
