use clap::{CommandFactory, FromArgMatches};
use log::info;
use os_str_bytes::OsStrBytesExt;
use took::Timer;

use crate::io::load_instance;

mod cli;
mod io;
mod query;
mod utils;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = argfile::expand_args_from(
        std::env::args_os(),
        argfile::parse_fromfile,
        argfile::PREFIX,
    )?;
    let args = cli::ProgramArguments::from_arg_matches(
        &cli::ProgramArguments::command()
            .get_matches_from(args.iter().flat_map(|it| {
                it.split(" ").into_iter().collect::<Vec<_>>()
            }))
    )?;
    info!("{:?}", &args);

    let load_timer = Timer::new();
    let instance = load_instance(&args.instance)?;
    info!(
        "instance {} loaded after {}: {} nodes, {} edges",
        instance.name,
        load_timer.took(),
        instance.graph.num_nodes(),
        instance.graph.num_edges()
    );

    if args.describe {
        for line in instance.graph.describe().lines() {
            info!("{}", line);
        }
    }

    info!("starting query {}", args.query.name());
    let report = query::run_query(&instance, &args)?;

    if args.print_summary_to_stdout {
        println!("{}", report.summary());
    }

    if let Some(output) = &args.output {
        info!("writing report to {}", output);
        io::query_report::write_report(output, &report)?;
    }

    Ok(())
}
