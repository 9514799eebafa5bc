use log::debug;
use rayon::prelude::*;

use crate::algorithm::path::DirectedPath;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Runs a single-source algorithm from every vertex
///
/// The graph is only read, so sources can be processed in parallel.
#[derive(Debug, Clone)]
pub struct AllPairsShortestPaths<A> {
    algorithm: A,
    parallel: bool,
}

impl<A> AllPairsShortestPaths<A> {
    /// All-pairs wrapper around `algorithm`, parallel by default
    pub fn new(algorithm: A) -> Self {
        AllPairsShortestPaths {
            algorithm,
            parallel: true,
        }
    }

    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    pub fn compute<W, G>(&self, graph: &G) -> Result<AllPairs<W>>
    where
        W: Weight + Send + Sync,
        G: Graph<W> + Sync,
        A: ShortestPathAlgorithm<W, G> + Sync,
    {
        let n = graph.vertex_count();
        debug!(
            "all-pairs {} over {} sources (parallel: {})",
            self.algorithm.name(),
            n,
            self.parallel
        );

        let run = |source: usize| self.algorithm.compute_shortest_paths(graph, source);
        let rows = if self.parallel {
            (0..n).into_par_iter().map(run).collect::<Result<Vec<_>>>()?
        } else {
            (0..n).map(run).collect::<Result<Vec<_>>>()?
        };
        Ok(AllPairs { rows })
    }
}

/// One [`ShortestPathResult`] per source vertex
#[derive(Debug, Clone)]
pub struct AllPairs<W>
where
    W: Weight,
{
    rows: Vec<ShortestPathResult<W>>,
}

impl<W> AllPairs<W>
where
    W: Weight,
{
    /// Results for paths leaving `source`
    pub fn from_source(&self, source: usize) -> Result<&ShortestPathResult<W>> {
        self.rows.get(source).ok_or(Error::InvalidVertex(source))
    }

    pub fn has_path(&self, source: usize, target: usize) -> bool {
        self.rows
            .get(source)
            .map_or(false, |row| row.has_path_to(target))
    }

    pub fn distance(&self, source: usize, target: usize) -> Result<W> {
        self.from_source(source)?.distance_to(target)
    }

    pub fn path(&self, source: usize, target: usize) -> Result<DirectedPath<W>> {
        self.from_source(source)?.path_to(target)
    }
}
