use std::env;
use std::process;

use log::{info, warn};
use ordered_float::OrderedFloat;
use serde_json::{json, Value};
use shortest_paths::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use shortest_paths::{
    AcyclicLongestPaths, AcyclicShortestPaths, BellmanFord, Dijkstra, DijkstraLazy,
    EdgeWeightedDigraph, Graph, KShortestPaths, ShortestPathCriticalEdges,
};

type W = OrderedFloat<f64>;

const USAGE: &str = "usage: shortest_paths \
<dijkstra|lazy|bellman-ford|bellman-ford-parent|acyclic|longest|yen|critical> \
<source> <edge-list> [target] [k]\n\
edge-list: \"source,target,weight;source,target,weight;...\"";

fn main() {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let output = match run(&args) {
        Ok(output) => output,
        Err(message) => {
            eprintln!("{}\n{}", message, USAGE);
            process::exit(2);
        }
    };
    match render(&output) {
        Ok(text) => println!("{}", text),
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        }
    }
}

fn render(output: &Value) -> Result<String, String> {
    serde_json::to_string_pretty(output).map_err(|e| format!("cannot serialize output: {e}"))
}

fn run(args: &[String]) -> Result<Value, String> {
    let [algorithm, source, edges, rest @ ..] = args else {
        return Err("missing arguments".to_string());
    };
    let source: usize = source.parse().map_err(|_| format!("bad source `{source}`"))?;
    let mut graph: EdgeWeightedDigraph<W> = edges.parse().map_err(|e| format!("{e}"))?;
    let target = rest
        .first()
        .map(|t| t.parse::<usize>().map_err(|_| format!("bad target `{t}`")))
        .transpose()?;
    let k = rest
        .get(1)
        .map(|k| k.parse::<usize>().map_err(|_| format!("bad k `{k}`")))
        .transpose()?
        .unwrap_or(3);

    info!(
        "running {} on {} vertices / {} edges",
        algorithm,
        graph.vertex_count(),
        graph.edge_count()
    );

    match algorithm.as_str() {
        "dijkstra" | "lazy" if !graph.validate_non_negative() => {
            warn!("graph has negative weights; {} results are unreliable", algorithm);
            single_source(algorithm, &graph, source, target)
        }
        "dijkstra" | "lazy" | "bellman-ford" | "bellman-ford-parent" | "acyclic" | "longest" => {
            single_source(algorithm, &graph, source, target)
        }
        "yen" => {
            let target = target.ok_or("yen needs a target")?;
            let ranked = KShortestPaths::new(k)
                .compute(&mut graph, source, target)
                .map_err(|e| e.to_string())?;
            Ok(json!({
                "algorithm": "yen",
                "source": source,
                "target": target,
                "paths": ranked.paths().iter().map(|p| json!({
                    "distance": p.distance(),
                    "path": p,
                })).collect::<Vec<_>>(),
            }))
        }
        "critical" => {
            let target = target.ok_or("critical needs a target")?;
            let report = ShortestPathCriticalEdges::new()
                .compute(&mut graph, source, target)
                .map_err(|e| e.to_string())?;
            Ok(json!({
                "algorithm": "critical",
                "shortest": report.shortest_path(),
                "critical": report.critical().map(|impact| json!({
                    "edge": impact.edge,
                    "distance_without": impact.distance_without,
                })).collect::<Vec<_>>(),
            }))
        }
        other => Err(format!("unknown algorithm `{other}`")),
    }
}

fn single_source(
    algorithm: &str,
    graph: &EdgeWeightedDigraph<W>,
    source: usize,
    target: Option<usize>,
) -> Result<Value, String> {
    let solver: Box<dyn ShortestPathAlgorithm<W, EdgeWeightedDigraph<W>>> = match algorithm {
        "dijkstra" => Box::new(Dijkstra::new()),
        "lazy" => Box::new(DijkstraLazy::new()),
        "bellman-ford" => Box::new(BellmanFord::new()),
        "bellman-ford-parent" => Box::new(BellmanFord::new().with_parent_check(true)),
        "acyclic" => Box::new(AcyclicShortestPaths::new().with_cycle_check(true)),
        _ => Box::new(AcyclicLongestPaths::new().with_cycle_check(true)),
    };
    let result = solver
        .compute_shortest_paths(graph, source)
        .map_err(|e| e.to_string())?;

    let targets: Vec<usize> = match target {
        Some(t) => vec![t],
        None => result.reachable_vertices().collect(),
    };
    Ok(json!({
        "algorithm": solver.name(),
        "source": source,
        "negative_cycle": result.negative_cycle(),
        "paths": targets.iter().map(|&t| describe(&result, t)).collect::<Vec<_>>(),
    }))
}

fn describe(result: &ShortestPathResult<W>, target: usize) -> Value {
    match result.path_to(target) {
        Ok(path) => json!({ "target": target, "distance": path.distance(), "path": path }),
        Err(e) => json!({ "target": target, "error": e.to_string() }),
    }
}
