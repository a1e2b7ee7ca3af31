use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use anyhow::Context;
use digraph::{DirectedGraph, Edge, Vertex};

pub type InstanceWeight = i64;

/**
Edge list instances:

NAME
NUMBER OF NODES
NUMBER OF EDGES
<empty line>
FROM,TO,WEIGHT
FROM,TO,WEIGHT
...

Nodes are numbered from 0. Edges are directed from FROM to TO, weights are integers.
Lines after the last edge are ignored.
 */
pub struct EdgeListInstance {
    pub name: String,
    pub graph: DirectedGraph<InstanceWeight>,
}

pub fn load_instance(path: impl AsRef<Path>) -> anyhow::Result<EdgeListInstance> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    read_instance(BufReader::new(f))
        .with_context(|| format!("cannot read instance {}", path.display()))
}

pub fn read_instance(reader: impl BufRead) -> anyhow::Result<EdgeListInstance> {
    let mut lines = reader.lines();

    let name = next_line(&mut lines, "name")?.trim().to_string();
    let num_nodes = next_line(&mut lines, "number of nodes")?
        .trim()
        .parse::<Vertex>()
        .context("number of nodes")?;
    let num_edges = next_line(&mut lines, "number of edges")?
        .trim()
        .parse::<usize>()
        .context("number of edges")?;

    let separator = next_line(&mut lines, "empty line")?;
    if !separator.trim().is_empty() {
        return Err(anyhow::Error::msg(format!(
            "expected an empty line after the header, found '{}'",
            separator
        )));
    }

    let mut graph = DirectedGraph::new(num_nodes);
    for i in 0..num_edges {
        let line = next_line(&mut lines, "edge")?;
        let edge = parse_edge(&line).with_context(|| format!("edge {} ('{}')", i, line))?;
        graph.add_edge(edge).with_context(|| format!("edge {}", i))?;
    }

    Ok(EdgeListInstance { name, graph })
}

fn next_line(lines: &mut Lines<impl BufRead>, what: &str) -> anyhow::Result<String> {
    Ok(lines
        .next()
        .with_context(|| format!("unexpected end of file, expected {}", what))??)
}

fn parse_edge(line: &str) -> anyhow::Result<Edge<InstanceWeight>> {
    let mut split = line.split(',').map(str::trim);
    let from = split
        .next()
        .context("expected next split: from")?
        .parse::<Vertex>()?;
    let to = split
        .next()
        .context("expected next split: to")?
        .parse::<Vertex>()?;
    let w = split
        .next()
        .context("expected next split: weight")?
        .parse::<InstanceWeight>()?;
    if split.next().is_some() {
        return Err(anyhow::Error::msg("too many fields, expected from,to,weight"));
    }
    Ok(Edge::new(from, to, w))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const SQUARE: &str = "square
4
3

0,1,1
1,2,2
0,2,5
";

    #[test]
    fn reads_header_and_edges() {
        let instance = read_instance(Cursor::new(SQUARE)).unwrap();
        assert_eq!(instance.name, "square");
        assert_eq!(instance.graph.num_nodes(), 4);
        assert_eq!(
            instance.graph.edges(),
            &[Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(0, 2, 5)]
        );
    }

    #[test]
    fn tolerates_spaces_and_trailing_lines() {
        let input = "spaced\n 2 \n1\n\n 1 , 0 , -3 \n\nrest\n";
        let instance = read_instance(Cursor::new(input)).unwrap();
        assert_eq!(instance.graph.edges(), &[Edge::new(1, 0, -3)]);
    }

    #[test]
    fn missing_edges_are_reported() {
        let err = read_instance(Cursor::new("short\n4\n3\n\n0,1,1\n")).err().unwrap();
        assert!(format!("{:#}", err).contains("expected edge"));
    }

    #[test]
    fn malformed_edges_are_reported() {
        let err = read_instance(Cursor::new("bad\n4\n1\n\n0;1;1\n")).err().unwrap();
        assert!(format!("{:#}", err).contains("edge 0"));

        assert!(read_instance(Cursor::new("bad\n4\n1\n\n0,1\n")).is_err());
        assert!(read_instance(Cursor::new("bad\n4\n1\n\n0,1,2,3\n")).is_err());
        assert!(read_instance(Cursor::new("bad\n4\n1\n\n0,1,x\n")).is_err());
    }

    #[test]
    fn edges_outside_the_graph_are_rejected() {
        let err = read_instance(Cursor::new("bad\n2\n1\n\n0,2,1\n")).err().unwrap();
        assert!(format!("{:#}", err).contains("node 2 is out of range"));
    }

    #[test]
    fn header_must_be_followed_by_empty_line() {
        assert!(read_instance(Cursor::new("bad\n2\n1\n0,1,1\n")).is_err());
    }
}
