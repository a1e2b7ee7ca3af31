use digraph::{path_weight, GraphError};
use log::{info, warn};
use took::Timer;

use crate::cli::{ProgramArguments, Query};
use crate::io::edge_list_reader::EdgeListInstance;
use crate::io::query_report::{EdgeRecord, QueryReport};
use crate::utils::logging::{format_log_forest, format_log_path};

/// Runs the query selected in `args` on `instance`.
///
/// An unreachable destination is a regular outcome (`found == false`), node ids outside the
/// graph are an error.
pub fn run_query(
    instance: &EdgeListInstance,
    args: &ProgramArguments,
) -> anyhow::Result<QueryReport> {
    let timer = Timer::new();
    let graph = &instance.graph;

    let (found, edges, total_weight) = match args.query {
        Query::ShortestPath => {
            let (origin, destination) = match (args.origin, args.destination) {
                (Some(origin), Some(destination)) => (origin, destination),
                _ => {
                    return Err(anyhow::Error::msg(
                        "shortest-path needs both --origin and --destination",
                    ))
                }
            };
            match graph.shortest_path(origin, destination) {
                Ok(path) => {
                    info!("shortest path: {}", format_log_path(&path));
                    let weight = path_weight(&path)?;
                    (true, path.iter().map(EdgeRecord::from).collect(), weight)
                }
                Err(GraphError::NotFound { .. }) => {
                    warn!("node {} cannot be reached from node {}", destination, origin);
                    (false, vec![], 0)
                }
                Err(e) => return Err(e.into()),
            }
        }
        Query::SpanningForest => {
            let forest = graph.minimum_spanning_forest();
            info!("spanning forest: {}", format_log_forest(forest.iter()));
            (
                true,
                forest.iter().map(EdgeRecord::from).collect(),
                forest.total_weight()?,
            )
        }
    };

    let took = timer.took();
    info!("{} finished after {}", args.query.name(), took);

    Ok(QueryReport {
        instance: instance.name.clone(),
        query: args.query.name().to_string(),
        origin: args.origin.filter(|_| args.query == Query::ShortestPath),
        destination: args.destination.filter(|_| args.query == Query::ShortestPath),
        found,
        edges,
        total_weight,
        took_ms: took.as_std().as_millis(),
    })
}
