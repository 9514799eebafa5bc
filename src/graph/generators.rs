use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::graph::traits::Weight;
use crate::graph::{DirectedEdge, EdgeWeightedDigraph};

/// Generates a digraph with `v` vertices and `e` random edges (no self-loops,
/// parallel edges possible). Weights come from `weight`.
pub fn generate_random_digraph<W, R, F>(
    rng: &mut R,
    v: usize,
    e: usize,
    mut weight: F,
) -> EdgeWeightedDigraph<W>
where
    W: Weight,
    R: Rng,
    F: FnMut(&mut R) -> W,
{
    let mut graph = EdgeWeightedDigraph::new(v);
    if v < 2 {
        return graph;
    }

    let mut added = 0;
    while added < e {
        let from = rng.gen_range(0..v);
        let to = rng.gen_range(0..v);
        // Avoid self-loops
        if from != to {
            let w = weight(rng);
            graph.push_edge(DirectedEdge::new(from, to, w));
            added += 1;
        }
    }

    graph
}

/// Generates a digraph without parallel edges or self-loops.
///
/// `e` is capped at `v * (v - 1)`.
pub fn generate_simple_digraph<W, R, F>(
    rng: &mut R,
    v: usize,
    e: usize,
    mut weight: F,
) -> EdgeWeightedDigraph<W>
where
    W: Weight,
    R: Rng,
    F: FnMut(&mut R) -> W,
{
    let mut graph = EdgeWeightedDigraph::new(v);
    let e = e.min(v * v.saturating_sub(1));
    let mut seen = HashSet::with_capacity(e);

    while seen.len() < e {
        let from = rng.gen_range(0..v);
        let to = rng.gen_range(0..v);
        if from != to && seen.insert((from, to)) {
            let w = weight(rng);
            graph.push_edge(DirectedEdge::new(from, to, w));
        }
    }

    graph
}

/// Generates a random DAG: edges always point forward in a hidden random
/// vertex ordering, so vertex ids themselves are not topologically sorted.
pub fn generate_random_dag<W, R, F>(
    rng: &mut R,
    v: usize,
    e: usize,
    mut weight: F,
) -> EdgeWeightedDigraph<W>
where
    W: Weight,
    R: Rng,
    F: FnMut(&mut R) -> W,
{
    let mut graph = EdgeWeightedDigraph::new(v);
    if v < 2 {
        return graph;
    }

    let mut ordering: Vec<usize> = (0..v).collect();
    ordering.shuffle(rng);

    for _ in 0..e {
        let a = rng.gen_range(0..v);
        let b = rng.gen_range(0..v);
        if a == b {
            continue;
        }
        let (first, second) = if a < b { (a, b) } else { (b, a) };
        let w = weight(rng);
        graph.push_edge(DirectedEdge::new(ordering[first], ordering[second], w));
    }

    graph
}

/// Generates a `width * height` grid with 4-connectivity in both directions
pub fn generate_grid<W, F>(width: usize, height: usize, mut weight: F) -> EdgeWeightedDigraph<W>
where
    W: Weight,
    F: FnMut(usize, usize) -> W,
{
    let mut graph = EdgeWeightedDigraph::new(width * height);
    let index = |x: usize, y: usize| y * width + x;

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            let mut neighbours = Vec::with_capacity(4);
            if x > 0 {
                neighbours.push(index(x - 1, y));
            }
            if x + 1 < width {
                neighbours.push(index(x + 1, y));
            }
            if y > 0 {
                neighbours.push(index(x, y - 1));
            }
            if y + 1 < height {
                neighbours.push(index(x, y + 1));
            }
            for neighbour in neighbours {
                let w = weight(current, neighbour);
                graph.push_edge(DirectedEdge::new(current, neighbour, w));
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::order::DirectedCycle;
    use crate::graph::Graph;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_edges_stay_inside_the_vertex_set() {
        let mut rng = StdRng::seed_from_u64(11);
        let random =
            generate_random_digraph(&mut rng, 8, 30, |rng: &mut StdRng| rng.gen_range(0..9i64));
        assert_eq!(random.edge_count(), 30);
        assert_eq!(random.edges().count(), 30);
        assert!(random.edges().all(|edge| edge.source() != edge.target() && edge.target() < 8));

        let simple = generate_simple_digraph(&mut rng, 4, 100, |_: &mut StdRng| 1i64);
        assert_eq!(simple.edge_count(), 12, "Capped at v * (v - 1)");

        let dag = generate_random_dag(&mut rng, 10, 40, |_: &mut StdRng| 1i64);
        assert_eq!(dag.edges().count(), dag.edge_count());
        assert!(!DirectedCycle::new(&dag).has_cycle());

        let grid = generate_grid(3, 2, |_, _| 1i64);
        assert_eq!(grid.edge_count(), 14);
    }
}
