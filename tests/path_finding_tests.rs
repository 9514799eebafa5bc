use ordered_float::OrderedFloat;
use shortest_paths::algorithm::ShortestPathAlgorithm;
use shortest_paths::graph::generators::generate_grid;
use shortest_paths::{
    BellmanFord, Dijkstra, DijkstraLazy, DijkstraSourceSink, DirectedEdge, EdgeWeightedDigraph, Error,
    Graph, MutableGraph, ScopedEdit,
};

fn w(x: f64) -> OrderedFloat<f64> {
    OrderedFloat(x)
}

// Test helper function to create a grid with 8-way moves (cardinal 10, diagonal 14)
fn create_test_grid(width: usize, height: usize) -> EdgeWeightedDigraph<i64> {
    let mut graph = EdgeWeightedDigraph::new(width * height);

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;

            let directions = [
                (0, -1, 10), (1, 0, 10), (0, 1, 10), (-1, 0, 10),
                (1, -1, 14), (1, 1, 14), (-1, 1, 14), (-1, -1, 14),
            ];

            for (dx, dy, cost) in directions {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i32 && ny < height as i32 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.add_weighted_edge(vertex, neighbor, cost).unwrap();
                }
            }
        }
    }

    graph
}

// Test that paths can be found in a simple grid
#[test]
fn test_path_finding_simple_grid() {
    let graph = create_test_grid(10, 10);
    let source = 0; // Top-left corner (0,0)
    let target = 99; // Bottom-right corner (9,9)

    let dijkstra = Dijkstra::new().compute_shortest_paths(&graph, source).unwrap();
    let lazy = DijkstraLazy::new().compute_shortest_paths(&graph, source).unwrap();

    assert!(dijkstra.has_path_to(target), "Dijkstra should find a path");
    assert_eq!(dijkstra.distance_to(target).unwrap(), 9 * 14, "Nine diagonal steps");
    assert_eq!(dijkstra.distances(), lazy.distances(), "Lazy variant must agree");

    let path = dijkstra.path_to(target).unwrap();
    assert_eq!(path.source_vertex(), source, "Path should start at source");
    assert_eq!(path.target_vertex(), target, "Path should end at target");
    assert_eq!(path.distance(), dijkstra.distance_to(target).unwrap());
}

// Test path finding with obstacles removed through a scoped edit
#[test]
fn test_path_finding_with_obstacles() {
    let mut graph = create_test_grid(10, 10);
    let original = graph.clone();
    let obstacles: Vec<usize> = (0..8).map(|y| y * 10 + 5).collect();

    {
        let mut edit = ScopedEdit::new(&mut graph);
        for &obstacle in &obstacles {
            edit.isolate_vertex(obstacle);
        }

        let result = Dijkstra::new().compute_shortest_paths(edit.graph(), 0).unwrap();
        assert!(result.has_path_to(99), "Dijkstra should find a path around obstacles");
        for &obstacle in &obstacles {
            assert!(!result.has_path_to(obstacle), "Obstacle {} must be unreachable", obstacle);
        }

        let vertexes = result.path_to(99).unwrap().vertexes();
        assert!(vertexes.iter().all(|v| !obstacles.contains(v)), "Path should avoid obstacles");
        assert!(result.distance_to(99).unwrap() > 9 * 14, "Detour must be longer");
    }

    assert_eq!(graph, original, "Graph must be restored after the edit");
}

#[test]
fn test_grid_generator_agrees_with_bellman_ford() {
    let graph = generate_grid(6, 4, |from, to| ((from * 7 + to * 3) % 11) as i64 + 1);
    let dijkstra = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    let bellman_ford = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(graph.vertex_count(), 24);
    assert_eq!(graph.edge_count(), 2 * (5 * 4 + 6 * 3));
    assert_eq!(dijkstra.distances(), bellman_ford.distances());
    assert!(!bellman_ford.has_negative_cycle());
}

// Edges 0->2(3), 0->1(1), 1->2(1), 2->3(1), 1->3(4)
#[test]
fn test_dijkstra_prefers_cheaper_long_path() {
    let graph = EdgeWeightedDigraph::from_edges(
        4,
        vec![(0, 2, w(3.0)), (0, 1, w(1.0)), (1, 2, w(1.0)), (2, 3, w(1.0)), (1, 3, w(4.0))],
    )
    .unwrap();

    let full = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    let pair = DijkstraSourceSink::new().compute(&graph, 0, 3).unwrap();

    for result in [&full, &pair] {
        assert_eq!(result.distance_to(3).unwrap(), w(3.0));
        assert_eq!(result.path_to(3).unwrap().vertexes(), vec![0, 1, 2, 3]);
        assert_eq!(
            result.edges_of_path_to(3).unwrap(),
            vec![
                DirectedEdge::new(0, 1, w(1.0)),
                DirectedEdge::new(1, 2, w(1.0)),
                DirectedEdge::new(2, 3, w(1.0)),
            ]
        );
    }
}

#[test]
fn test_disconnected_vertex_has_no_path() {
    let mut graph = EdgeWeightedDigraph::new(4);
    graph.add_edge(DirectedEdge::new(0, 1, w(1.0))).unwrap();
    graph.add_edge(DirectedEdge::new(1, 2, w(2.0))).unwrap();

    let algorithms: Vec<Box<dyn ShortestPathAlgorithm<OrderedFloat<f64>, EdgeWeightedDigraph<OrderedFloat<f64>>>>> =
        vec![Box::new(Dijkstra::new()), Box::new(DijkstraLazy::new()), Box::new(BellmanFord::new())];

    for algorithm in algorithms {
        let result = algorithm.compute_shortest_paths(&graph, 0).unwrap();
        assert!(!result.has_path_to(3), "{} reached an isolated vertex", algorithm.name());
        assert_eq!(result.distance_to(3), Err(Error::NoPath(3)));
        assert_eq!(result.edges_of_path_to(3), Err(Error::NoPath(3)));
        assert_eq!(result.distance_to(0).unwrap(), w(0.0));
        assert!(result.edges_of_path_to(0).unwrap().is_empty());
        assert_eq!(result.distance_to(9), Err(Error::InvalidVertex(9)));
    }
}

#[test]
fn test_invalid_source_is_rejected() {
    let graph = EdgeWeightedDigraph::<i64>::new(3);
    assert_eq!(
        Dijkstra::new().compute_shortest_paths(&graph, 3),
        Err(Error::SourceNotFound(3))
    );
    assert_eq!(
        BellmanFord::new().compute_shortest_paths(&graph, 7),
        Err(Error::SourceNotFound(7))
    );
}

#[test]
fn test_parallel_edges_and_self_loops() {
    let graph = EdgeWeightedDigraph::from_edges(
        3,
        vec![(0, 0, 1), (0, 1, 5), (0, 1, 2), (1, 1, 0), (1, 2, 4), (1, 2, 3)],
    )
    .unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distance_to(1).unwrap(), 2);
    assert_eq!(result.distance_to(2).unwrap(), 5);
    assert_eq!(
        result.edges_of_path_to(2).unwrap(),
        vec![DirectedEdge::new(0, 1, 2), DirectedEdge::new(1, 2, 3)]
    );
}
