//! Early-terminating Dijkstra searches for point-to-point and set-to-set queries.
//!
//! Each search stops as soon as a target is extracted from the queue: every
//! remaining entry is at least as far, so no later relaxation can shorten the
//! answer. Distances to vertices other than the settled target are partial.

use log::debug;

use crate::algorithm::dijkstra::Settle;
use crate::algorithm::path::DirectedPath;
use crate::algorithm::ShortestPathResult;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Single-pair Dijkstra that fails fast on negative edge weights
#[derive(Debug, Default, Clone)]
pub struct DijkstraSourceSink;

impl DijkstraSourceSink {
    pub fn new() -> Self {
        DijkstraSourceSink
    }

    /// Shortest path from `source` to `target`.
    ///
    /// Fails with `NegativeWeight` if a negative edge is scanned before the
    /// target is settled.
    pub fn compute<W, G>(
        &self,
        graph: &G,
        source: usize,
        target: usize,
    ) -> Result<ShortestPathResult<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        check_target::<W, G>(graph, target)?;
        let search = Settle {
            sources: &[source],
            reject_negative: true,
        };
        let (result, reached) = search.run(graph, |vertex| vertex == target)?;
        if reached.is_none() {
            debug!("target {} unreachable from {}", target, source);
        }
        Ok(result)
    }
}

/// Dijkstra from the closest of several sources to one target
#[derive(Debug, Default, Clone)]
pub struct DijkstraMultiSource;

impl DijkstraMultiSource {
    pub fn new() -> Self {
        DijkstraMultiSource
    }

    /// All `sources` start at distance zero; the path to `target` begins at
    /// whichever source is nearest to it.
    pub fn compute<W, G>(
        &self,
        graph: &G,
        sources: &[usize],
        target: usize,
    ) -> Result<ShortestPathResult<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        check_target::<W, G>(graph, target)?;
        let search = Settle {
            sources,
            reject_negative: true,
        };
        search.run(graph, |vertex| vertex == target).map(|(result, _)| result)
    }
}

/// Shortest path from any vertex of one set to any vertex of another
#[derive(Debug, Default, Clone)]
pub struct DijkstraSets;

impl DijkstraSets {
    pub fn new() -> Self {
        DijkstraSets
    }

    pub fn compute<W, G>(
        &self,
        graph: &G,
        sources: &[usize],
        sinks: &[usize],
    ) -> Result<SetsPath<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        let mut is_sink = vec![false; graph.vertex_count()];
        for &sink in sinks {
            check_target::<W, G>(graph, sink)?;
            is_sink[sink] = true;
        }

        let search = Settle {
            sources,
            reject_negative: true,
        };
        let (result, sink) = search.run(graph, |vertex| is_sink[vertex])?;
        Ok(SetsPath { result, sink })
    }
}

/// Outcome of a [`DijkstraSets`] search
#[derive(Debug, Clone)]
pub struct SetsPath<W>
where
    W: Weight,
{
    result: ShortestPathResult<W>,
    sink: Option<usize>,
}

impl<W> SetsPath<W>
where
    W: Weight,
{
    /// The sink closest to the source set, if any is reachable
    pub fn nearest_sink(&self) -> Option<usize> {
        self.sink
    }

    pub fn distance(&self) -> Option<W> {
        self.sink.and_then(|sink| self.result.distance_to(sink).ok())
    }

    pub fn path(&self) -> Option<DirectedPath<W>> {
        self.sink.and_then(|sink| self.result.path_to(sink).ok())
    }

    /// The underlying, partially settled search state
    pub fn result(&self) -> &ShortestPathResult<W> {
        &self.result
    }
}

fn check_target<W, G>(graph: &G, target: usize) -> Result<()>
where
    W: Weight,
    G: Graph<W>,
{
    if graph.has_vertex(target) {
        Ok(())
    } else {
        Err(Error::InvalidVertex(target))
    }
}
