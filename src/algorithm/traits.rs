use crate::algorithm::path::DirectedPath;
use crate::graph::{DirectedEdge, Graph, Weight};
use crate::{Error, Result};

/// Result of a shortest path algorithm execution
///
/// Built once by an algorithm and read-only afterwards. `distance_to[v]`
/// holds the sentinel for unreached vertices (`W::max_value()` for shortest
/// paths, `W::min_value()` for longest paths); `edge_to[v]` is the last edge
/// on the best known path, absent for sources and unreached vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Source vertices, each at distance zero
    sources: Vec<usize>,

    /// Best known distance to every vertex
    distance_to: Vec<W>,

    /// Parent edge of every vertex in the shortest path tree
    edge_to: Vec<Option<DirectedEdge<W>>>,

    /// Value marking unreached vertices
    unreached: W,

    /// Edges of a negative cycle, when one was found
    negative_cycle: Option<Vec<DirectedEdge<W>>>,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Fresh state for a shortest path search: sources at zero, the rest at `max_value()`
    pub(crate) fn init(vertex_count: usize, sources: &[usize]) -> Self {
        Self::init_with_sentinel(vertex_count, sources, W::max_value())
    }

    /// Fresh state for a longest path search: the rest at `min_value()`
    pub(crate) fn init_longest(vertex_count: usize, sources: &[usize]) -> Self {
        Self::init_with_sentinel(vertex_count, sources, W::min_value())
    }

    fn init_with_sentinel(vertex_count: usize, sources: &[usize], unreached: W) -> Self {
        let mut distance_to = vec![unreached; vertex_count];
        for &source in sources {
            distance_to[source] = W::zero();
        }
        ShortestPathResult {
            sources: sources.to_vec(),
            distance_to,
            edge_to: vec![None; vertex_count],
            unreached,
            negative_cycle: None,
        }
    }

    /// Distance to `vertex` if it has been reached so far
    pub(crate) fn current_distance(&self, vertex: usize) -> Option<W> {
        let distance = self.distance_to[vertex];
        (distance != self.unreached).then_some(distance)
    }

    /// Relaxes `edge` toward a shorter distance; returns true if `edge.target()` improved
    ///
    /// A candidate that does not fit strictly inside the weight range is no
    /// improvement, so stored distances never equal either sentinel.
    pub(crate) fn relax(&mut self, edge: &DirectedEdge<W>) -> bool {
        let Some(from) = self.current_distance(edge.source()) else {
            return false;
        };
        let Some(candidate) = from.bounded_add(edge.weight()) else {
            return false;
        };
        if candidate < self.distance_to[edge.target()] {
            self.distance_to[edge.target()] = candidate;
            self.edge_to[edge.target()] = Some(*edge);
            true
        } else {
            false
        }
    }

    /// Relaxes `edge` toward a longer distance; returns true if `edge.target()` improved
    pub(crate) fn relax_longest(&mut self, edge: &DirectedEdge<W>) -> bool {
        let Some(from) = self.current_distance(edge.source()) else {
            return false;
        };
        let Some(candidate) = from.bounded_add(edge.weight()) else {
            return false;
        };
        if candidate > self.distance_to[edge.target()] {
            self.distance_to[edge.target()] = candidate;
            self.edge_to[edge.target()] = Some(*edge);
            true
        } else {
            false
        }
    }

    pub(crate) fn set_negative_cycle(&mut self, cycle: Vec<DirectedEdge<W>>) {
        self.negative_cycle = Some(cycle);
    }

    /// Parent edges of every vertex, indexed by vertex
    pub(crate) fn tree_edges(&self) -> &[Option<DirectedEdge<W>>] {
        &self.edge_to
    }

    /// First source vertex (the only one for single-source algorithms)
    pub fn source(&self) -> Option<usize> {
        self.sources.first().copied()
    }

    pub fn sources(&self) -> &[usize] {
        &self.sources
    }

    pub fn vertex_count(&self) -> usize {
        self.distance_to.len()
    }

    pub fn has_path_to(&self, vertex: usize) -> bool {
        vertex < self.vertex_count() && self.current_distance(vertex).is_some()
    }

    /// Distance to `vertex`; fails for unknown or unreached vertices
    pub fn distance_to(&self, vertex: usize) -> Result<W> {
        if vertex >= self.vertex_count() {
            return Err(Error::InvalidVertex(vertex));
        }
        self.current_distance(vertex).ok_or(Error::NoPath(vertex))
    }

    /// Distances to every vertex, `None` where unreached
    pub fn distances(&self) -> Vec<Option<W>> {
        (0..self.vertex_count()).map(|v| self.current_distance(v)).collect()
    }

    /// Last edge on the best known path to `vertex`
    pub fn edge_to(&self, vertex: usize) -> Option<DirectedEdge<W>> {
        self.edge_to.get(vertex).copied().flatten()
    }

    /// Edges of the path to `vertex`, in source-to-target order.
    ///
    /// Walks the parent edges backward onto a stack. A walk longer than the
    /// vertex count means the parent edges contain a (negative) cycle.
    pub fn edges_of_path_to(&self, vertex: usize) -> Result<Vec<DirectedEdge<W>>> {
        self.path_to(vertex).map(DirectedPath::into_edges)
    }

    /// The path to `vertex`
    pub fn path_to(&self, vertex: usize) -> Result<DirectedPath<W>> {
        self.distance_to(vertex)?;

        let mut stack = Vec::new();
        let mut current = vertex;
        while let Some(edge) = self.edge_to[current] {
            if stack.len() >= self.vertex_count() {
                return Err(Error::NegativeCycle);
            }
            stack.push(edge);
            current = edge.source();
        }
        stack.reverse();
        DirectedPath::new(current, stack)
    }

    /// Vertices with a known path
    pub fn reachable_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.vertex_count()).filter(move |&v| self.has_path_to(v))
    }

    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle.is_some()
    }

    pub fn negative_cycle(&self) -> Option<&[DirectedEdge<W>]> {
        self.negative_cycle.as_deref()
    }
}

/// Trait for single-source shortest path algorithms
///
/// Implementations hold configuration only; all state lives in the returned
/// [`ShortestPathResult`].
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// Fails with `SourceNotFound` unless every source is a vertex of `graph`
pub(crate) fn check_sources<W, G>(graph: &G, sources: &[usize]) -> Result<()>
where
    W: Weight,
    G: Graph<W> + ?Sized,
{
    match sources.iter().find(|&&source| !graph.has_vertex(source)) {
        Some(&source) => Err(Error::SourceNotFound(source)),
        None => Ok(()),
    }
}
