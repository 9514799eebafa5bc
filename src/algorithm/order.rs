//! Depth-first orders, directed cycle detection and topological sort.
//!
//! All visits use an explicit stack so deep graphs cannot overflow the call stack.

use crate::graph::{DirectedEdge, Graph, Weight};
use crate::{Error, Result};

type EdgeIter<'a, W> = Box<dyn Iterator<Item = DirectedEdge<W>> + 'a>;

/// Preorder and postorder of a depth-first visit started from every
/// unvisited vertex in increasing id order
#[derive(Debug, Clone)]
pub struct DepthFirstOrder {
    preorder: Vec<usize>,
    postorder: Vec<usize>,
}

impl DepthFirstOrder {
    pub fn new<W, G>(graph: &G) -> Self
    where
        W: Weight,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut preorder = Vec::with_capacity(n);
        let mut postorder = Vec::with_capacity(n);

        for root in 0..n {
            if marked[root] {
                continue;
            }
            marked[root] = true;
            preorder.push(root);
            let mut stack: Vec<(usize, EdgeIter<'_, W>)> = vec![(root, graph.incident_edges(root))];

            while let Some((vertex, edges)) = stack.last_mut() {
                match edges.next() {
                    Some(edge) => {
                        let next = edge.target();
                        if !marked[next] {
                            marked[next] = true;
                            preorder.push(next);
                            stack.push((next, graph.incident_edges(next)));
                        }
                    }
                    None => {
                        postorder.push(*vertex);
                        stack.pop();
                    }
                }
            }
        }

        DepthFirstOrder { preorder, postorder }
    }

    pub fn preorder(&self) -> &[usize] {
        &self.preorder
    }

    pub fn postorder(&self) -> &[usize] {
        &self.postorder
    }

    /// A topological order when the graph is acyclic
    pub fn reverse_postorder(&self) -> Vec<usize> {
        self.postorder.iter().rev().copied().collect()
    }
}

/// Finds one directed cycle, if any, and reports its edges
#[derive(Debug, Clone)]
pub struct DirectedCycle<W> {
    cycle: Option<Vec<DirectedEdge<W>>>,
}

impl<W> DirectedCycle<W>
where
    W: Weight,
{
    pub fn new<G>(graph: &G) -> Self
    where
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut on_stack = vec![false; n];
        let mut edge_to: Vec<Option<DirectedEdge<W>>> = vec![None; n];

        for root in 0..n {
            if marked[root] {
                continue;
            }
            marked[root] = true;
            on_stack[root] = true;
            let mut stack: Vec<(usize, EdgeIter<'_, W>)> = vec![(root, graph.incident_edges(root))];

            while let Some((vertex, edges)) = stack.last_mut() {
                let vertex = *vertex;
                let Some(edge) = edges.next() else {
                    on_stack[vertex] = false;
                    stack.pop();
                    continue;
                };

                let next = edge.target();
                if on_stack[next] {
                    let cycle = Self::trace(&edge_to, edge);
                    return DirectedCycle { cycle: Some(cycle) };
                }
                if !marked[next] {
                    marked[next] = true;
                    on_stack[next] = true;
                    edge_to[next] = Some(edge);
                    stack.push((next, graph.incident_edges(next)));
                }
            }
        }

        DirectedCycle { cycle: None }
    }

    /// Closes the cycle formed by the back edge `closing` using the DFS tree edges
    fn trace(
        edge_to: &[Option<DirectedEdge<W>>],
        closing: DirectedEdge<W>,
    ) -> Vec<DirectedEdge<W>> {
        let head = closing.target();
        let mut cycle = vec![closing];
        let mut current = closing.source();
        while current != head {
            match edge_to[current] {
                Some(edge) => {
                    cycle.push(edge);
                    current = edge.source();
                }
                None => break,
            }
        }
        cycle.reverse();
        cycle
    }

    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Cycle edges in traversal order; the last edge ends where the first starts
    pub fn cycle(&self) -> Option<&[DirectedEdge<W>]> {
        self.cycle.as_deref()
    }

    pub fn into_cycle(self) -> Option<Vec<DirectedEdge<W>>> {
        self.cycle
    }
}

/// Topological order of an acyclic graph
#[derive(Debug, Clone)]
pub struct Topological {
    order: Vec<usize>,
    rank: Vec<usize>,
}

impl Topological {
    /// Fails with `CycleDetected` if the graph has a directed cycle
    pub fn new<W, G>(graph: &G) -> Result<Self>
    where
        W: Weight,
        G: Graph<W>,
    {
        if DirectedCycle::<W>::new(graph).has_cycle() {
            return Err(Error::CycleDetected);
        }

        let order = DepthFirstOrder::new::<W, G>(graph).reverse_postorder();
        let mut rank = vec![0; order.len()];
        for (position, &vertex) in order.iter().enumerate() {
            rank[vertex] = position;
        }
        Ok(Topological { order, rank })
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Position of `vertex` in the order
    pub fn rank(&self, vertex: usize) -> Option<usize> {
        self.rank.get(vertex).copied()
    }
}
