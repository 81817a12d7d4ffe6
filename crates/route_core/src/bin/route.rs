use std::io::{self, BufRead, Write};

use route_core::{
    graph::NodeIndex,
    search::dijkstra::Dijkstra,
    util::cli::{self, Cfg},
};

/// Returns the node given on the command line or asks for it on stdin.
fn read_node(
    arg: Option<i64>,
    prompt: &str,
    num_nodes: usize,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<NodeIndex> {
    match arg {
        Some(value) => cli::validate_node(value, num_nodes),
        None => {
            let line = cli::prompt_line(prompt, input, output)?;
            cli::parse_node(&line, num_nodes)
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg: Cfg = cli::parse();
    let g = cfg.load_graph()?;
    let num_nodes = g.num_nodes();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let nodes = read_node(
        cfg.src,
        &cli::node_prompt("starting", num_nodes),
        num_nodes,
        &mut input,
        &mut output,
    )
    .and_then(|src| {
        let dst = read_node(
            cfg.dst,
            &cli::node_prompt("destination", num_nodes),
            num_nodes,
            &mut input,
            &mut output,
        )?;
        Ok((src, dst))
    });

    let (src, dst) = match nodes {
        Ok(nodes) => nodes,
        Err(e) => {
            log::debug!("Rejected input: {:#}", e);
            eprintln!("{}", cli::invalid_node_message(num_nodes));
            std::process::exit(1);
        }
    };

    let mut dijkstra = Dijkstra::new(&g);
    let sp = dijkstra.search(src, dst);
    log::debug!("{}", dijkstra.stats);

    println!("{}", cli::render_route(src, dst, sp.as_ref(), cfg.json)?);

    Ok(())
}
