//! Text edge lists of the form `"source,target,weight;source,target,weight;..."`.
//!
//! Whitespace around fields and a trailing `;` are ignored.

use std::str::FromStr;

use crate::graph::traits::{MutableGraph, Weight};
use crate::graph::{DirectedEdge, EdgeWeightedDigraph};
use crate::{Error, Result};

/// Parses an edge list into a graph with exactly `vertex_count` vertices
pub fn parse_edge_list<W>(vertex_count: usize, text: &str) -> Result<EdgeWeightedDigraph<W>>
where
    W: Weight + FromStr,
{
    let mut graph = EdgeWeightedDigraph::new(vertex_count);
    for edge in parse_triples(text)? {
        graph.add_edge(edge)?;
    }
    Ok(graph)
}

fn parse_triples<W>(text: &str) -> Result<Vec<DirectedEdge<W>>>
where
    W: Weight + FromStr,
{
    text.split(';')
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(parse_triple)
        .collect()
}

fn parse_triple<W>(chunk: &str) -> Result<DirectedEdge<W>>
where
    W: Weight + FromStr,
{
    let fields: Vec<&str> = chunk.split(',').map(str::trim).collect();
    let [source, target, weight] = fields.as_slice() else {
        return Err(Error::Parse(format!("expected `source,target,weight`, got `{chunk}`")));
    };
    let vertex = |field: &str| {
        field
            .parse::<usize>()
            .map_err(|_| Error::Parse(format!("bad vertex `{field}` in `{chunk}`")))
    };
    let weight = weight
        .parse::<W>()
        .map_err(|_| Error::Parse(format!("bad weight `{weight}` in `{chunk}`")))?;
    Ok(DirectedEdge::new(vertex(*source)?, vertex(*target)?, weight))
}

/// Parses an edge list, sizing the graph to the largest vertex mentioned
impl<W> FromStr for EdgeWeightedDigraph<W>
where
    W: Weight + FromStr,
{
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let edges = parse_triples::<W>(text)?;
        let vertex_count = edges
            .iter()
            .map(|edge| edge.source().max(edge.target()) + 1)
            .max()
            .unwrap_or(0);
        let mut graph = EdgeWeightedDigraph::new(vertex_count);
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }
}
