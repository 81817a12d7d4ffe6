//! Interactive shell to run route queries against a graph
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use route_core::{
    graph::{node_index, Graph},
    search::dijkstra::Dijkstra,
    util::test_graphs::graph_city_network,
};
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!(
        "Graph has {} nodes and {} edges",
        context.graph.num_nodes(),
        context.graph.num_edges()
    )))
}

fn run_dijkstra(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let src = *args.get_one::<usize>("src").unwrap();
    let dst = *args.get_one::<usize>("dst").unwrap();

    if src >= context.graph.num_nodes() || dst >= context.graph.num_nodes() {
        return Ok(Some(format!(
            "Invalid node numbers. Please enter numbers between 0 and {}.",
            context.graph.num_nodes().saturating_sub(1)
        )));
    }

    let mut dijkstra = Dijkstra::new(&context.graph);
    let sp = dijkstra.search(node_index(src), node_index(dst));

    if let Some(sp) = sp {
        let route: Vec<String> = sp.nodes.iter().map(|n| n.to_string()).collect();
        Ok(Some(format!(
            "Shortest distance: {}\nOptimal route: {}\n{}",
            sp.weight,
            route.join(" "),
            dijkstra.stats
        )))
    } else {
        Ok(Some("No route found".to_string()))
    }
}

fn measure_dijkstra(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::Rng;

    let n = *args.get_one::<usize>("n").unwrap_or(&10);
    let num_nodes = context.graph.num_nodes();
    if num_nodes == 0 {
        return Ok(Some("Graph has no nodes".to_string()));
    }

    // Select n random start and end nodes
    let mut rng = rand::thread_rng();
    let src_nodes: Vec<usize> = (0..n).map(|_| rng.gen_range(0..num_nodes)).collect();
    let dst_nodes: Vec<usize> = (0..n).map(|_| rng.gen_range(0..num_nodes)).collect();

    let mut res = String::new();
    // Run Dijkstra for each pair of nodes
    for (src, dst) in src_nodes.iter().zip(dst_nodes.iter()) {
        let mut dijkstra = Dijkstra::new(&context.graph);
        let sp = dijkstra.search(node_index(*src), node_index(*dst));
        match sp {
            Some(sp) => res.push_str(&format!(
                "{} -> {}: {} ({:?})\n",
                src,
                dst,
                sp.weight,
                dijkstra.stats.duration.unwrap_or_default()
            )),
            None => res.push_str(&format!("{} -> {}: no route\n", src, dst)),
        }
    }

    Ok(Some(res))
}

const HISTORY_FILE: &str = ".history";

/// Reads `<edges.csv> <num nodes>` from `args` or falls back to the built-in
/// network
fn load_graph(args: &[String]) -> anyhow::Result<Graph> {
    match args {
        [path, num_nodes, ..] => {
            let num_nodes: usize = num_nodes
                .parse()
                .with_context(|| format!("Invalid number of nodes {:?}", num_nodes))?;
            Graph::from_csv(Path::new(path), num_nodes)
        }
        [_] => anyhow::bail!("Usage: repl [<edges.csv> <num nodes>]"),
        [] => Ok(graph_city_network()),
    }
}

struct Context {
    graph: Graph,
}

impl Context {
    fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let graph = match load_graph(&args) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };
    let context = Context::new(graph);

    let mut repl = Repl::new(context)
        .with_name("Pathfinder")
        .with_version("v0.1.0")
        .with_description("Simple REPL to run shortest path queries")
        .with_banner("Welcome to Pathfinder")
        .with_history(PathBuf::from(HISTORY_FILE), 100)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(
            Command::new("route")
                .arg(
                    Arg::new("src")
                        .value_parser(value_parser!(usize))
                        .required(true)
                        .help("ID of source node"),
                )
                .arg(
                    Arg::new("dst")
                        .value_parser(value_parser!(usize))
                        .required(true)
                        .help("ID of destination node"),
                )
                .about("Calculate shortest path using Dijkstra's algorithm"),
            run_dijkstra,
        )
        .with_command(
            Command::new("measure")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random shortest paths to calculate"),
                )
                .about("Measure `n` random shortest paths calculations"),
            measure_dijkstra,
        );

    repl.run()
}
