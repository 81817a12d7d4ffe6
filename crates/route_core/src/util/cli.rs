use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use anyhow::{bail, Context};
use clap::Parser;
use serde::Serialize;

use crate::{
    constants::Distance,
    graph::{node_index, Graph, NodeIndex},
    search::shortest_path::ShortestPath,
    util::test_graphs::graph_city_network,
};

#[derive(Parser)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// CSV file with the columns `source,target,weight`. The built-in city
    /// network is used if not set
    #[arg(long, value_name = "FILE", requires = "nodes")]
    edges: Option<PathBuf>,

    /// Number of nodes of the graph read from `--edges`
    #[arg(long, value_name = "N")]
    nodes: Option<usize>,

    /// Starting node. Asked for on stdin if not set
    #[arg(long, allow_negative_numbers = true)]
    src: Option<i64>,

    /// Destination node. Asked for on stdin if not set
    #[arg(long, allow_negative_numbers = true)]
    dst: Option<i64>,

    /// Print the result as JSON
    #[arg(long, default_value = "false")]
    json: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Cfg {
    pub edges: Option<PathBuf>,
    pub num_nodes: usize,
    pub src: Option<i64>,
    pub dst: Option<i64>,
    pub json: bool,
}

impl Cfg {
    /// Builds the graph the queries run on.
    pub fn load_graph(&self) -> anyhow::Result<Graph> {
        match &self.edges {
            Some(path) => Graph::from_csv(path, self.num_nodes),
            None => Ok(graph_city_network()),
        }
    }
}

pub fn parse() -> Cfg {
    let cli = Cli::parse();

    Cfg {
        edges: cli.edges,
        num_nodes: cli.nodes.unwrap_or_default(),
        src: cli.src,
        dst: cli.dst,
        json: cli.json,
    }
}

/// Message shown when a node given by the user is not part of the graph.
pub fn invalid_node_message(num_nodes: usize) -> String {
    if num_nodes == 0 {
        return "Invalid node numbers. The graph has no nodes.".to_string();
    }
    format!(
        "Invalid node numbers. Please enter numbers between 0 and {}.",
        num_nodes - 1
    )
}

/// Prompt asking for a node, e.g. `Enter the starting node (0-7): `.
pub fn node_prompt(label: &str, num_nodes: usize) -> String {
    if num_nodes == 0 {
        return format!("Enter the {} node (graph has no nodes): ", label);
    }
    format!("Enter the {} node (0-{}): ", label, num_nodes - 1)
}

/// Checks that `value` is a node of a graph with `num_nodes` nodes.
pub fn validate_node(value: i64, num_nodes: usize) -> anyhow::Result<NodeIndex> {
    match usize::try_from(value) {
        Ok(idx) if idx < num_nodes => Ok(node_index(idx)),
        _ => bail!("Node {} is not in range [0, {})", value, num_nodes),
    }
}

/// Parses one line of user input into a node of a graph with `num_nodes`
/// nodes.
pub fn parse_node(input: &str, num_nodes: usize) -> anyhow::Result<NodeIndex> {
    let value: i64 = input
        .trim()
        .parse()
        .with_context(|| format!("{:?} is not a node number", input.trim()))?;
    validate_node(value, num_nodes)
}

/// Writes `prompt` and reads one line from `input`.
pub fn prompt_line(
    prompt: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("Unexpected end of input");
    }
    Ok(line)
}

#[derive(Debug, Serialize)]
struct RouteReport {
    source: usize,
    target: usize,
    distance: Option<Distance>,
    path: Vec<usize>,
}

/// Formats the result of a query for the terminal or as JSON.
pub fn render_route(
    source: NodeIndex,
    target: NodeIndex,
    sp: Option<&ShortestPath>,
    json: bool,
) -> anyhow::Result<String> {
    if json {
        let report = RouteReport {
            source: source.index(),
            target: target.index(),
            distance: sp.map(|sp| sp.weight),
            path: sp
                .map(|sp| sp.nodes.iter().map(|n| n.index()).collect())
                .unwrap_or_default(),
        };
        return Ok(serde_json::to_string(&report)?);
    }

    Ok(match sp {
        Some(sp) => {
            let route: Vec<String> = sp.nodes.iter().map(|n| n.to_string()).collect();
            format!(
                "Shortest distance: {}\nOptimal route: {}",
                sp.weight,
                route.join(" ")
            )
        }
        None => "No route found between the specified nodes.".to_string(),
    })
}
