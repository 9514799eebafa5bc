use shortest_paths::algorithm::order::{DepthFirstOrder, DirectedCycle, Topological};
use shortest_paths::graph::parse_edge_list;
use shortest_paths::{DirectedEdge, EdgeWeightedDigraph, Error, Graph, MutableGraph, ScopedEdit};

fn sample() -> EdgeWeightedDigraph<i64> {
    EdgeWeightedDigraph::from_edges(
        5,
        vec![(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1), (2, 3, 5), (3, 4, 3)],
    )
    .unwrap()
}

#[test]
fn test_counts_and_adjacency_order() {
    let graph = sample();
    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(graph.out_degree(0), 2);
    assert_eq!(graph.in_degree(3), 2);
    assert_eq!(
        graph.incident_edges(0).collect::<Vec<_>>(),
        vec![DirectedEdge::new(0, 1, 4), DirectedEdge::new(0, 2, 1)]
    );
    assert_eq!(graph.edges().count(), 6);
    assert!(graph.adjacent(42).is_empty());
    assert_eq!(graph.incident_edges(42).count(), 0);
}

#[test]
fn test_add_edge_validates_endpoints() {
    let mut graph = EdgeWeightedDigraph::<i64>::new(2);
    assert_eq!(graph.add_weighted_edge(0, 2, 1), Err(Error::InvalidVertex(2)));
    assert_eq!(graph.add_weighted_edge(3, 0, 1), Err(Error::InvalidVertex(3)));
    assert_eq!(graph.edge_count(), 0);

    graph.add_weighted_edge(1, 1, -2).unwrap();
    assert_eq!(graph.edge_count(), 1, "Self-loops are allowed");
    assert!(!graph.validate_non_negative());
}

#[test]
fn test_remove_edge_removes_one_copy() {
    let mut graph = EdgeWeightedDigraph::from_edges(2, vec![(0, 1, 3), (0, 1, 3), (0, 1, 7)]).unwrap();
    assert!(graph.remove_edge(&DirectedEdge::new(0, 1, 3)));
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(
        graph.adjacent(0),
        &[DirectedEdge::new(0, 1, 3), DirectedEdge::new(0, 1, 7)]
    );
    assert!(!graph.remove_edge(&DirectedEdge::new(1, 0, 3)));
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_unique_edge_lookup() {
    let mut graph = sample();
    assert_eq!(graph.unique_edge(2, 1), Ok(DirectedEdge::new(2, 1, 2)));
    assert_eq!(graph.unique_edge(1, 0), Err(Error::EdgeNotFound(1, 0)));
    assert_eq!(graph.unique_edge(9, 0), Err(Error::InvalidVertex(9)));

    graph.add_weighted_edge(2, 1, 8).unwrap();
    assert_eq!(graph.unique_edge(2, 1), Err(Error::ParallelEdges(2, 1)));
}

#[test]
fn test_reverse_and_touching_edges() {
    let graph = sample();
    let reversed = graph.reverse();
    assert_eq!(reversed.edge_count(), graph.edge_count());
    assert_eq!(reversed.unique_edge(4, 3), Ok(DirectedEdge::new(4, 3, 3)));
    assert_eq!(reversed.reverse().edges().count(), 6);

    let mut touching = graph.edges_touching(1);
    touching.sort_by_key(|edge| (edge.source(), edge.target()));
    assert_eq!(
        touching,
        vec![DirectedEdge::new(0, 1, 4), DirectedEdge::new(1, 3, 1), DirectedEdge::new(2, 1, 2)]
    );
}

#[test]
fn test_scoped_edit_nested_in_function_with_error() {
    fn isolate_then_lookup(graph: &mut EdgeWeightedDigraph<i64>) -> Result<usize, Error> {
        let mut edit = ScopedEdit::new(graph);
        let removed = edit.isolate_vertex(3);
        edit.graph().unique_edge(3, 4)?;
        Ok(removed)
    }

    let mut graph = sample();
    let original = graph.clone();
    assert_eq!(isolate_then_lookup(&mut graph), Err(Error::EdgeNotFound(3, 4)));
    assert_eq!(graph, original, "Graph restored after the error path");
}

#[test]
fn test_scoped_edit_reports_removed_edges() {
    let mut graph = sample();
    let mut edit = ScopedEdit::new(&mut graph);
    assert_eq!(edit.isolate_vertex(4), 1);
    assert!(edit.remove_edge(&DirectedEdge::new(0, 2, 1)));
    assert_eq!(
        edit.removed_edges().copied().collect::<Vec<_>>(),
        vec![DirectedEdge::new(3, 4, 3), DirectedEdge::new(0, 2, 1)]
    );
    assert_eq!(edit.graph().edge_count(), 4);
}

#[test]
fn test_parse_edge_list_with_fixed_vertex_count() {
    let graph: EdgeWeightedDigraph<i64> = parse_edge_list(6, " 0,1,2 ; 1,2,-1;").unwrap();
    assert_eq!(graph.vertex_count(), 6);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(
        parse_edge_list::<i64>(2, "0,5,1"),
        Err(Error::InvalidVertex(5))
    );
}

#[test]
fn test_topological_order_respects_edges() {
    let graph = sample();
    let topological = Topological::new::<i64, _>(&graph).unwrap();
    for edge in graph.edges() {
        assert!(
            topological.rank(edge.source()) < topological.rank(edge.target()),
            "Edge {} points backward",
            edge
        );
    }
    assert_eq!(topological.order().len(), graph.vertex_count());

    let order = DepthFirstOrder::new::<i64, _>(&graph);
    assert_eq!(order.preorder().len(), 5);
    assert_eq!(order.postorder().len(), 5);
    assert_eq!(order.reverse_postorder(), topological.order().to_vec());
}

#[test]
fn test_directed_cycle_found_in_order() {
    let mut graph = sample();
    assert!(!DirectedCycle::new(&graph).has_cycle());
    assert_eq!(Topological::new::<i64, _>(&graph).map(|_| ()), Ok(()));

    graph.add_weighted_edge(4, 2, 1).unwrap();
    let cycle = DirectedCycle::new(&graph).into_cycle().unwrap();
    assert!(cycle.len() >= 3);
    for pair in cycle.windows(2) {
        assert_eq!(pair[0].target(), pair[1].source());
    }
    assert_eq!(cycle[cycle.len() - 1].target(), cycle[0].source());
    assert!(matches!(
        Topological::new::<i64, _>(&graph),
        Err(Error::CycleDetected)
    ));
}

#[test]
fn test_self_loop_is_a_cycle() {
    let graph = EdgeWeightedDigraph::from_edges(2, vec![(0, 1, 1), (1, 1, 1)]).unwrap();
    let cycle = DirectedCycle::new(&graph);
    assert_eq!(cycle.cycle(), Some(&[DirectedEdge::new(1, 1, 1)][..]));
}
