use log::debug;

use crate::algorithm::order::{DepthFirstOrder, Topological};
use crate::algorithm::traits::check_sources;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, Weight};
use crate::Result;

/// Shortest paths in a DAG: one relaxation pass in topological order, O(V + E).
///
/// Arbitrary (also negative) weights are fine. Cyclic input is the caller's
/// problem and yields meaningless distances unless `with_cycle_check(true)`
/// is set, in which case it fails with `CycleDetected`.
#[derive(Debug, Default, Clone)]
pub struct AcyclicShortestPaths {
    cycle_check: bool,
}

impl AcyclicShortestPaths {
    pub fn new() -> Self {
        AcyclicShortestPaths::default()
    }

    /// Verify acyclicity before relaxing
    pub fn with_cycle_check(mut self, enabled: bool) -> Self {
        self.cycle_check = enabled;
        self
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for AcyclicShortestPaths
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "AcyclicShortestPaths"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        check_sources::<W, G>(graph, &[source])?;
        let order = vertex_order::<W, G>(graph, self.cycle_check)?;

        let mut result = ShortestPathResult::init(graph.vertex_count(), &[source]);
        for vertex in order {
            for edge in graph.incident_edges(vertex) {
                result.relax(&edge);
            }
        }
        Ok(result)
    }
}

/// Longest paths in a DAG (critical path method): the same single pass,
/// keeping the larger distance on each relaxation.
#[derive(Debug, Default, Clone)]
pub struct AcyclicLongestPaths {
    cycle_check: bool,
}

impl AcyclicLongestPaths {
    pub fn new() -> Self {
        AcyclicLongestPaths::default()
    }

    /// Verify acyclicity before relaxing
    pub fn with_cycle_check(mut self, enabled: bool) -> Self {
        self.cycle_check = enabled;
        self
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for AcyclicLongestPaths
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "AcyclicLongestPaths"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        check_sources::<W, G>(graph, &[source])?;
        let order = vertex_order::<W, G>(graph, self.cycle_check)?;

        let mut result = ShortestPathResult::init_longest(graph.vertex_count(), &[source]);
        for vertex in order {
            for edge in graph.incident_edges(vertex) {
                result.relax_longest(&edge);
            }
        }
        Ok(result)
    }
}

fn vertex_order<W, G>(graph: &G, cycle_check: bool) -> Result<Vec<usize>>
where
    W: Weight,
    G: Graph<W>,
{
    if cycle_check {
        let topological = Topological::new::<W, G>(graph)?;
        Ok(topological.order().to_vec())
    } else {
        debug!("relaxing {} vertices in unchecked reverse postorder", graph.vertex_count());
        Ok(DepthFirstOrder::new::<W, G>(graph).reverse_postorder())
    }
}
