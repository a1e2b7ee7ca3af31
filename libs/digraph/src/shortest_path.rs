//! Single-pair shortest path by label setting (Dijkstra). Only correct for non-negative
//! weights.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use log::{debug, trace};

use crate::graph::AdjacencyIndex;
use crate::utils::NodeVec;
use crate::{DirectedGraph, Edge, GraphError, Result, Vertex, Weight};

/// Best known way to reach a node: the edge used last and the cost up to its head.
#[derive(Clone, Copy, Debug)]
struct Label<W> {
    edge: usize,
    cost: W,
}

/// Mutable state of one search.
struct Search<W> {
    labels: NodeVec<Option<Label<W>>>,
    frontier: BinaryHeap<Reverse<(W, Vertex)>>,
    /// Heads of edges whose cost left the range of `W`.
    overflowed: FixedBitSet,
}

impl<W: Weight> DirectedGraph<W> {
    /// Lowest-cost path from `origin` to `destination`, as edges ordered from `origin` on.
    ///
    /// Returns an empty path if `origin == destination`, [`GraphError::NotFound`] if
    /// `destination` cannot be reached, [`GraphError::InvalidArgument`] for node ids outside
    /// the graph and [`GraphError::WeightOverflow`] if `destination` is only reachable at a cost
    /// outside the range of `W`. The adjacency index is rebuilt for every call; use
    /// [`DirectedGraph::adjacency_index`] once and query the index directly when the graph
    /// does not change between queries.
    pub fn shortest_path(&self, origin: Vertex, destination: Vertex) -> Result<Vec<Edge<W>>> {
        self.adjacency_index().shortest_path(origin, destination)
    }
}

impl<'g, W: Weight> AdjacencyIndex<'g, W> {
    pub fn shortest_path(&self, origin: Vertex, destination: Vertex) -> Result<Vec<Edge<W>>> {
        self.check_node(origin)?;
        self.check_node(destination)?;
        if origin == destination {
            return Ok(vec![]);
        }

        let num_nodes = self.num_nodes();
        let mut settled = FixedBitSet::with_capacity(num_nodes as usize);
        let mut search = Search {
            labels: node_vec![None; num_nodes],
            frontier: BinaryHeap::new(),
            overflowed: FixedBitSet::with_capacity(num_nodes as usize),
        };

        // the origin never gets a label, edges back into it are ignored
        settled.insert(origin as usize);
        self.relax(origin, W::zero(), &settled, &mut search);

        let mut num_settled = 0usize;
        while let Some(Reverse((cost, node))) = search.frontier.pop() {
            if settled[node as usize] {
                continue;
            }
            settled.insert(node as usize);
            num_settled += 1;

            if node == destination {
                let path = self.backtrack(origin, destination, &search.labels);
                debug!(
                    "shortest path {} -> {}: {} edges, cost {}, {} nodes settled",
                    origin,
                    destination,
                    path.len(),
                    cost,
                    num_settled
                );
                return Ok(path);
            }

            self.relax(node, cost, &settled, &mut search);
        }

        debug!(
            "no path {} -> {}, {} nodes settled, {} costs overflowed",
            origin,
            destination,
            num_settled,
            search.overflowed.count_ones(..)
        );
        if self.reaches(search.overflowed, &settled, destination) {
            return Err(GraphError::WeightOverflow);
        }
        Err(GraphError::NotFound {
            origin,
            destination,
        })
    }

    /// Labels the unsettled heads of the edges leaving `node`. Heads whose cost does not fit
    /// into `W` are marked in `search.overflowed` instead.
    #[inline(always)]
    fn relax(&self, node: Vertex, cost: W, settled: &FixedBitSet, search: &mut Search<W>) {
        for (id, edge) in self.iter_outgoing_edges(node) {
            let to = edge.to;
            if settled[to as usize] {
                continue;
            }
            let Some(candidate) = cost.checked_add(&edge.w) else {
                trace!("cost to {} via edge {} overflows", to, id);
                search.overflowed.insert(to as usize);
                continue;
            };
            let improves = match search.labels[to] {
                Some(label) => candidate < label.cost,
                None => true,
            };
            if improves {
                trace!("label {}: cost {} via edge {}", to, candidate, id);
                search.labels[to] = Some(Label {
                    edge: id,
                    cost: candidate,
                });
                search.frontier.push(Reverse((candidate, to)));
            }
        }
    }

    /// Whether `destination` is reachable from the `start` nodes without passing through
    /// `settled` ones.
    fn reaches(&self, start: FixedBitSet, settled: &FixedBitSet, destination: Vertex) -> bool {
        let mut stack: Vec<Vertex> = start.ones().map(|node| node as Vertex).collect();
        let mut seen = start;
        while let Some(node) = stack.pop() {
            if node == destination {
                return true;
            }
            for (_, edge) in self.iter_outgoing_edges(node) {
                let to = edge.to as usize;
                if !settled[to] && !seen.put(to) {
                    stack.push(edge.to);
                }
            }
        }
        false
    }

    /// Follows the labels back from `destination` until an edge leaving `origin` is reached.
    fn backtrack(
        &self,
        origin: Vertex,
        destination: Vertex,
        labels: &NodeVec<Option<Label<W>>>,
    ) -> Vec<Edge<W>> {
        let mut path = vec![];
        let mut node = destination;
        loop {
            let Some(label) = labels[node] else {
                unreachable!("node {} was settled without a label", node);
            };
            let edge = self.edge(label.edge);
            path.push(edge.clone());
            if edge.from == origin {
                break;
            }
            node = edge.from;
        }
        path.reverse();
        path
    }
}

/// Sum of the weights of `edges`, zero for an empty path.
pub fn path_weight<W: Weight>(edges: &[Edge<W>]) -> Result<W> {
    edges.iter().try_fold(W::zero(), |sum, edge| {
        sum.checked_add(&edge.w).ok_or(GraphError::WeightOverflow)
    })
}
