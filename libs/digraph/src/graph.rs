use std::fmt::{Display, Formatter};

use crate::utils::NodeVec;
use crate::{Edge, GraphError, Result, Vertex, Weight};


/// Directed multigraph over the nodes `0..num_nodes`, edges kept in insertion order.
#[derive(Clone, Debug)]
pub struct DirectedGraph<W> {
    num_nodes: Vertex,
    edges: Vec<Edge<W>>,
}

impl<W: Weight> DirectedGraph<W> {
    pub fn new(num_nodes: Vertex) -> Self {
        Self {
            num_nodes,
            edges: vec![],
        }
    }

    pub fn num_nodes(&self) -> Vertex {
        self.num_nodes
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Appends `edge`. Parallel edges and self-loops are accepted.
    pub fn add_edge(&mut self, edge: Edge<W>) -> Result<()> {
        self.check_node(edge.from)?;
        self.check_node(edge.to)?;
        self.edges.push(edge);
        Ok(())
    }

    /// Appends all `edges`, stopping at the first invalid one. Edges before it stay added.
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = Edge<W>>) -> Result<()> {
        for edge in edges {
            self.add_edge(edge)?;
        }
        Ok(())
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    pub fn iter_edges(&self) -> impl Iterator<Item = &Edge<W>> {
        self.edges.iter()
    }

    /// Groups the current edges by origin node. Rebuilt on every call.
    pub fn adjacency_index(&self) -> AdjacencyIndex<'_, W> {
        AdjacencyIndex::build(self.num_nodes, &self.edges)
    }

    /// One `From: <from> To: <to> Weight: <weight>` line per edge.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    pub(crate) fn check_node(&self, node: Vertex) -> Result<()> {
        check_node(node, self.num_nodes)
    }
}

impl<W: Weight> Display for DirectedGraph<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for edge in &self.edges {
            writeln!(
                f,
                "From: {from} To: {to} Weight: {w}",
                from = edge.from,
                to = edge.to,
                w = edge.w,
            )?;
        }
        Ok(())
    }
}

fn check_node(node: Vertex, num_nodes: Vertex) -> Result<()> {
    if node < num_nodes {
        Ok(())
    } else {
        Err(GraphError::InvalidArgument { node, num_nodes })
    }
}

/// Outgoing edges of every node, in compressed row layout: the edges leaving `v` are
/// `order[row_ptr[v]..row_ptr[v + 1]]`, each bucket in insertion order.
pub struct AdjacencyIndex<'g, W> {
    num_nodes: Vertex,
    edges: &'g [Edge<W>],
    order: Vec<usize>,
    row_ptr: NodeVec<usize>,
}

impl<'g, W: Weight> AdjacencyIndex<'g, W> {
    fn build(num_nodes: Vertex, edges: &'g [Edge<W>]) -> Self {
        let mut row_ptr = node_vec![0; num_nodes + 1];
        for edge in edges {
            row_ptr[edge.from + 1] += 1;
        }
        for v in 0..num_nodes {
            row_ptr[v + 1] += row_ptr[v];
        }

        let mut next = row_ptr.clone();
        let mut order = vec![0; edges.len()];
        for (id, edge) in edges.iter().enumerate() {
            order[next[edge.from]] = id;
            next[edge.from] += 1;
        }

        Self {
            num_nodes,
            edges,
            order,
            row_ptr,
        }
    }

    pub fn num_nodes(&self) -> Vertex {
        self.num_nodes
    }

    /// Edges leaving `from` together with their position in the graph's edge list.
    pub fn iter_outgoing_edges(
        &self,
        from: Vertex,
    ) -> impl Iterator<Item = (usize, &'g Edge<W>)> + '_ {
        let edges = self.edges;
        self.order[self.row_ptr[from]..self.row_ptr[from + 1]]
            .iter()
            .map(move |&id| (id, &edges[id]))
    }

    pub fn out_degree(&self, from: Vertex) -> usize {
        self.row_ptr[from + 1] - self.row_ptr[from]
    }

    pub fn edge(&self, id: usize) -> &'g Edge<W> {
        &self.edges[id]
    }

    pub(crate) fn check_node(&self, node: Vertex) -> Result<()> {
        check_node(node, self.num_nodes)
    }
}
