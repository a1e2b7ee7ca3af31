//! Queries over a directed, edge-weighted graph with a fixed set of nodes `0..n`.
//!
//! Two queries are provided:
//!
//! - [`DirectedGraph::shortest_path`]: lowest-cost path between two nodes (label-setting
//!   search, non-negative weights only)
//! - [`DirectedGraph::minimum_spanning_forest`]: minimum-weight acyclic edge subset connecting
//!   every component of the underlying undirected graph, built on [`DisjointSet`]
//!
//! ```
//! use digraph::{DirectedGraph, Edge, path_weight};
//!
//! let mut graph = DirectedGraph::new(4);
//! graph.add_edge(Edge::new(0, 1, 1)).unwrap();
//! graph.add_edge(Edge::new(1, 2, 2)).unwrap();
//! graph.add_edge(Edge::new(0, 2, 5)).unwrap();
//!
//! let path = graph.shortest_path(0, 2).unwrap();
//! assert_eq!(path_weight(&path), Ok(3));
//! assert_eq!(graph.minimum_spanning_forest().total_weight(), Ok(3));
//! ```

#[macro_use]
mod utils;
pub mod disjoint_set;
pub mod graph;
pub mod shortest_path;
pub mod spanning_forest;

use std::cmp::Ordering;
use std::fmt::Display;

use num_traits::{CheckedAdd, NumOps, Zero};

pub use disjoint_set::DisjointSet;
pub use graph::{AdjacencyIndex, DirectedGraph};
pub use shortest_path::path_weight;
pub use spanning_forest::SpanningForest;

pub type Vertex = u32;

/// Edge weight. Stands in for a trait alias (rust-lang/rfcs#1733), every type with the listed
/// bounds is a weight.
pub trait Weight: Zero + NumOps + CheckedAdd + Copy + Ord + Display {}

impl<W> Weight for W where W: Zero + NumOps + CheckedAdd + Copy + Ord + Display {}

/// Directed edge `from -> to` with weight `w`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge<W> {
    pub from: Vertex,
    pub to: Vertex,
    pub w: W,
}

impl<W: Weight> Edge<W> {
    pub fn new(from: Vertex, to: Vertex, w: W) -> Self {
        Self { from, to, w }
    }

    pub fn weight(&self) -> W {
        self.w
    }

    /// Total order of edges, by weight only.
    pub fn cmp_by_weight(&self, other: &Self) -> Ordering {
        self.w.cmp(&other.w)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A node id outside `0..num_nodes`.
    #[error("invalid argument: node {node} is out of range for a graph with {num_nodes} nodes")]
    InvalidArgument { node: Vertex, num_nodes: Vertex },

    /// No path from `origin` to `destination`.
    #[error("no path from {origin} to {destination}")]
    NotFound { origin: Vertex, destination: Vertex },

    /// A sum of edge weights does not fit into the weight type.
    #[error("sum of edge weights overflows the weight type")]
    WeightOverflow,
}

pub type Result<T> = std::result::Result<T, GraphError>;
