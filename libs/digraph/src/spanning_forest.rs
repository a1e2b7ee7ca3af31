//! Minimum spanning forest by greedy edge selection (Kruskal).
//!
//! Edge direction is ignored for connectivity: an edge joins the groups of both of its end
//! nodes. The result therefore spans every component of the underlying undirected graph.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::debug;

use crate::{DirectedGraph, DisjointSet, Edge, Result, Weight};

/// Edges of a minimum spanning forest, in the order they were selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningForest<W> {
    edges: Vec<Edge<W>>,
}

impl<W: Weight> SpanningForest<W> {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edge<W>> {
        self.edges.iter()
    }

    pub fn contains(&self, edge: &Edge<W>) -> bool {
        self.edges.contains(edge)
    }

    /// Sum of the selected weights, [`crate::GraphError::WeightOverflow`] if it does not fit
    /// into `W`.
    pub fn total_weight(&self) -> Result<W> {
        crate::path_weight(&self.edges)
    }

    pub fn into_edges(self) -> Vec<Edge<W>> {
        self.edges
    }
}

impl<W: Weight> IntoIterator for SpanningForest<W> {
    type Item = Edge<W>;
    type IntoIter = std::vec::IntoIter<Edge<W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

impl<W: Weight> DirectedGraph<W> {
    /// Minimum-weight acyclic subset of the edges connecting each component of the
    /// underlying undirected graph. Equal weights are taken in insertion order.
    pub fn minimum_spanning_forest(&self) -> SpanningForest<W> {
        let edges = self.edges();
        let mut groups = DisjointSet::new(self.num_nodes());
        let mut candidates: BinaryHeap<Reverse<(W, usize)>> = edges
            .iter()
            .enumerate()
            .map(|(id, edge)| Reverse((edge.w, id)))
            .collect();

        let mut selected = Vec::with_capacity((self.num_nodes() as usize).saturating_sub(1));
        let mut num_scanned = 0usize;
        while groups.group_count() > 1 {
            let Some(Reverse((_, id))) = candidates.pop() else {
                break;
            };
            num_scanned += 1;
            let edge = &edges[id];
            if groups.merge_unchecked(edge.from, edge.to) {
                selected.push(edge.clone());
            }
        }

        debug!(
            "spanning forest: {} edges selected, {} of {} scanned, {} groups left",
            selected.len(),
            num_scanned,
            edges.len(),
            groups.group_count()
        );

        SpanningForest { edges: selected }
    }
}
