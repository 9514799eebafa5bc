//! Yen's k-shortest loopless paths and its overlapping-paths variant.
//!
//! Paths are produced in non-decreasing distance order. Each new path is
//! searched for by taking every vertex of the previously accepted path as a
//! spur: the accepted root prefix is kept, the continuations already used by
//! accepted paths with that root are removed, the root's other vertices are cut
//! off, and Dijkstra finds the best spur from there to the target. Removals go
//! through a [`ScopedEdit`], so the graph is whole again after every spur,
//! whether the search succeeded or failed.
//!
//! The graph must be simple (no parallel edges) and non-negatively weighted.

use std::collections::HashSet;

use log::debug;

use crate::algorithm::dijkstra_variants::DijkstraSourceSink;
use crate::algorithm::path::DirectedPath;
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::{DirectedEdge, MutableGraph, ScopedEdit, Weight};
use crate::{Error, Result};

/// Lazily enumerates the shortest `source -> target` paths in order
///
/// Holds the graph exclusively for its whole lifetime.
#[derive(Debug)]
pub struct YenEnumerator<'g, W, G>
where
    W: Weight,
    G: MutableGraph<W>,
{
    graph: &'g mut G,
    source: usize,
    target: usize,
    /// Accepted paths, shortest first
    accepted: Vec<DirectedPath<W>>,
    /// Candidate ids ordered by distance, ties by discovery order
    candidates: BinaryHeapWrapper<usize, W>,
    /// Candidate paths by id
    pool: Vec<DirectedPath<W>>,
    /// Vertex sequences already accepted or queued
    seen: HashSet<Vec<usize>>,
    exhausted: bool,
}

impl<'g, W, G> YenEnumerator<'g, W, G>
where
    W: Weight,
    G: MutableGraph<W>,
{
    pub fn new(graph: &'g mut G, source: usize, target: usize) -> Result<Self> {
        for vertex in [source, target] {
            if !graph.has_vertex(vertex) {
                return Err(Error::InvalidVertex(vertex));
            }
        }
        Ok(YenEnumerator {
            graph,
            source,
            target,
            accepted: Vec::new(),
            candidates: BinaryHeapWrapper::new(),
            pool: Vec::new(),
            seen: HashSet::new(),
            exhausted: false,
        })
    }

    /// Paths accepted so far, shortest first
    pub fn accepted(&self) -> &[DirectedPath<W>] {
        &self.accepted
    }

    /// The next shortest path, or `None` once no alternative is left
    pub fn next_path(&mut self) -> Result<Option<DirectedPath<W>>> {
        if self.exhausted {
            return Ok(None);
        }

        let next = match self.accepted.last().cloned() {
            None => self.first_path()?,
            Some(previous) => {
                self.queue_spurs(&previous)?;
                self.pop_candidate()
            }
        };

        match next {
            Some(path) => {
                self.accepted.push(path.clone());
                Ok(Some(path))
            }
            None => {
                debug!(
                    "no further paths from {} to {} after {}",
                    self.source,
                    self.target,
                    self.accepted.len()
                );
                self.exhausted = true;
                Ok(None)
            }
        }
    }

    fn first_path(&mut self) -> Result<Option<DirectedPath<W>>> {
        let result = DijkstraSourceSink::new().compute(&*self.graph, self.source, self.target)?;
        if !result.has_path_to(self.target) {
            return Ok(None);
        }
        let path = result.path_to(self.target)?;
        self.seen.insert(path.vertexes());
        Ok(Some(path))
    }

    fn pop_candidate(&mut self) -> Option<DirectedPath<W>> {
        let (id, _) = self.candidates.pop()?;
        Some(self.pool[id].clone())
    }

    /// Queues the best spur path for every vertex of `previous` except the target
    fn queue_spurs(&mut self, previous: &DirectedPath<W>) -> Result<()> {
        let vertexes = previous.vertexes();

        for spur_index in 0..previous.len() {
            let spur = vertexes[spur_index];
            let root = previous.prefix(spur_index);
            let root_vertexes = &vertexes[..=spur_index];

            let mut edit = ScopedEdit::new(&mut *self.graph);

            let mut used_next: Vec<usize> = self
                .accepted
                .iter()
                .map(DirectedPath::vertexes)
                .filter(|path| path.len() > spur_index + 1 && path[..=spur_index] == *root_vertexes)
                .map(|path| path[spur_index + 1])
                .collect();
            used_next.sort_unstable();
            used_next.dedup();
            for next in used_next {
                let edge = edit.graph().unique_edge(spur, next)?;
                edit.remove_edge(&edge);
            }

            for &vertex in &root_vertexes[..spur_index] {
                edit.isolate_vertex(vertex);
            }

            let spur_result = DijkstraSourceSink::new().compute(edit.graph(), spur, self.target)?;
            if !spur_result.has_path_to(self.target) {
                continue;
            }
            let candidate = root.combine(&spur_result.path_to(self.target)?)?;
            if self.seen.insert(candidate.vertexes()) {
                self.candidates.push(self.pool.len(), candidate.distance());
                self.pool.push(candidate);
            }
        }

        Ok(())
    }
}

impl<W, G> Iterator for YenEnumerator<'_, W, G>
where
    W: Weight,
    G: MutableGraph<W>,
{
    type Item = Result<DirectedPath<W>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_path().transpose()
    }
}

/// Up to `k` shortest loopless paths between two vertices
#[derive(Debug, Clone)]
pub struct KShortestPaths {
    k: usize,
}

impl KShortestPaths {
    pub fn new(k: usize) -> Self {
        KShortestPaths { k }
    }

    /// Finds up to `k` paths; fewer only when no more exist
    pub fn compute<W, G>(
        &self,
        graph: &mut G,
        source: usize,
        target: usize,
    ) -> Result<RankedPaths<W>>
    where
        W: Weight,
        G: MutableGraph<W>,
    {
        let mut enumerator = YenEnumerator::new(graph, source, target)?;
        let mut paths = Vec::with_capacity(self.k);
        while paths.len() < self.k {
            match enumerator.next_path()? {
                Some(path) => paths.push(path),
                None => break,
            }
        }
        Ok(RankedPaths { paths })
    }
}

/// Paths ranked by distance; rank 0 is the shortest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedPaths<W> {
    paths: Vec<DirectedPath<W>>,
}

impl<W> RankedPaths<W>
where
    W: Weight,
{
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn has_path(&self, rank: usize) -> bool {
        rank < self.paths.len()
    }

    pub fn path(&self, rank: usize) -> Result<&DirectedPath<W>> {
        self.paths.get(rank).ok_or(Error::NoSuchRank(rank))
    }

    pub fn distance(&self, rank: usize) -> Result<W> {
        self.path(rank).map(DirectedPath::distance)
    }

    pub fn paths(&self) -> &[DirectedPath<W>] {
        &self.paths
    }
}

/// Yen's enumeration that stops as soon as the found paths share no edge
///
/// The edges common to every path found are the critical edges: removing
/// any of them lengthens or disconnects all of the first paths.
#[derive(Debug, Clone)]
pub struct OverlappingYens {
    k: usize,
}

impl OverlappingYens {
    pub fn new(k: usize) -> Self {
        OverlappingYens { k }
    }

    pub fn compute<W, G>(
        &self,
        graph: &mut G,
        source: usize,
        target: usize,
    ) -> Result<OverlappingPaths<W>>
    where
        W: Weight,
        G: MutableGraph<W>,
    {
        let mut enumerator = YenEnumerator::new(graph, source, target)?;
        let mut paths: Vec<DirectedPath<W>> = Vec::new();
        let mut common: Vec<DirectedEdge<W>> = Vec::new();

        while paths.len() < self.k {
            let Some(path) = enumerator.next_path()? else {
                break;
            };
            if paths.is_empty() {
                common = path.edges().to_vec();
            } else {
                common.retain(|edge| path.contains_edge(edge));
            }
            paths.push(path);

            if common.is_empty() {
                debug!("paths stopped overlapping after {}", paths.len());
                break;
            }
        }

        Ok(OverlappingPaths {
            ranked: RankedPaths { paths },
            common,
        })
    }
}

/// Result of [`OverlappingYens`]
#[derive(Debug, Clone)]
pub struct OverlappingPaths<W> {
    ranked: RankedPaths<W>,
    common: Vec<DirectedEdge<W>>,
}

impl<W> OverlappingPaths<W>
where
    W: Weight,
{
    pub fn ranked(&self) -> &RankedPaths<W> {
        &self.ranked
    }

    /// Edges on every path found, in order along the shortest path
    pub fn critical_edges(&self) -> &[DirectedEdge<W>] {
        &self.common
    }
}
