use std::fmt;

use serde::{Deserialize, Serialize};

/// A weighted edge `source -> target`. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectedEdge<W> {
    source: usize,
    target: usize,
    weight: W,
}

impl<W: Copy> DirectedEdge<W> {
    pub fn new(source: usize, target: usize, weight: W) -> Self {
        DirectedEdge { source, target, weight }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    /// True if `vertex` is either endpoint
    pub fn touches(&self, vertex: usize) -> bool {
        self.source == vertex || self.target == vertex
    }

    /// Same endpoints, opposite direction
    pub fn reversed(&self) -> Self {
        DirectedEdge::new(self.target, self.source, self.weight)
    }
}

impl<W: fmt::Debug> fmt::Display for DirectedEdge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {:?}", self.source, self.target, self.weight)
    }
}
