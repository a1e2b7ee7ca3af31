use clap::{Parser, ValueEnum};
use digraph::Vertex;

#[derive(Parser, Debug)]
#[command(version)]
pub struct ProgramArguments {
    #[arg(short, long, help = "instance file path")]
    pub instance: String,

    #[arg(short, long, value_enum, help = "query to run on the instance")]
    pub query: Query,

    #[arg(
        long,
        help = "origin node of the path",
        required_if_eq("query", "shortest-path")
    )]
    pub origin: Option<Vertex>,

    #[arg(
        long,
        help = "destination node of the path",
        required_if_eq("query", "shortest-path")
    )]
    pub destination: Option<Vertex>,

    #[arg(short, long, help = "file to store the query report (json)")]
    pub output: Option<String>,

    #[arg(long, help = "log all edges of the instance", default_value = "false")]
    pub describe: bool,

    #[arg(long, help = "print summary to stdout", default_value = "false")]
    pub print_summary_to_stdout: bool,
}

#[derive(Clone, Copy, ValueEnum, Debug, PartialEq, Eq)]
pub enum Query {
    ShortestPath,
    SpanningForest,
}

impl Query {
    pub fn name(&self) -> &'static str {
        match self {
            Query::ShortestPath => "shortest-path",
            Query::SpanningForest => "spanning-forest",
        }
    }
}
