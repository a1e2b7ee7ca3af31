use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use digraph::{Edge, Vertex};
use serde::Serialize;

use crate::io::edge_list_reader::InstanceWeight;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub from: Vertex,
    pub to: Vertex,
    pub weight: InstanceWeight,
}

impl From<&Edge<InstanceWeight>> for EdgeRecord {
    fn from(edge: &Edge<InstanceWeight>) -> Self {
        Self {
            from: edge.from,
            to: edge.to,
            weight: edge.w,
        }
    }
}

/// Outcome of a single query. `edges` is empty if the query found nothing.
#[derive(Serialize, Debug)]
pub struct QueryReport {
    pub instance: String,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Vertex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Vertex>,
    pub found: bool,
    pub edges: Vec<EdgeRecord>,
    pub total_weight: InstanceWeight,
    pub took_ms: u128,
}

impl QueryReport {
    /// `instance,query,found,edges,total_weight,took_ms`
    pub fn summary(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            self.instance,
            self.query,
            self.found,
            self.edges.len(),
            self.total_weight,
            self.took_ms
        )
    }
}

pub fn write_report(path: impl AsRef<Path>, report: &QueryReport) -> anyhow::Result<()> {
    let f = File::create(path)?;
    let mut file = BufWriter::new(&f);
    serde_json::to_writer_pretty(&mut file, report)?;
    writeln!(file)?;
    file.flush()?;
    Ok(())
}
