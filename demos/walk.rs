//! Example that walks a small sample graph and prints the visitation order
//! and the path found to a target vertex.
//!
//! Usage:
//!   cargo run --example walk
//!   cargo run --example walk -- --search dfs K
//!   cargo run --example walk -- --trace --start C S

use std::process;

use clap::{Parser, ValueEnum};
use graphwalk::{path::trace_back, prelude::*, tracing_support::init_tracing};

const SAMPLE_EDGES: &[(&str, &str)] = &[
    ("A", "B"),
    ("A", "C"),
    ("C", "F"),
    ("C", "G"),
    ("G", "M"),
    ("G", "N"),
    ("B", "D"),
    ("B", "E"),
    ("D", "H"),
    ("D", "I"),
    ("D", "J"),
    ("E", "K"),
    ("K", "I"),
    ("I", "S"),
];

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SearchArg {
    Bfs,
    Dfs,
}

impl From<SearchArg> for Search {
    fn from(arg: SearchArg) -> Self {
        match arg {
            SearchArg::Bfs => Search::BreadthFirst,
            SearchArg::Dfs => Search::DepthFirst,
        }
    }
}

/// Walk the sample graph from a start vertex until a target is reached.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Vertex to stop at
    #[arg(default_value = "S")]
    target: String,

    /// Vertex to start from
    #[arg(long, default_value = "A")]
    start: String,

    /// Traversal to use
    #[arg(long, value_enum, default_value_t = SearchArg::Bfs)]
    search: SearchArg,

    /// Log graph and traversal events
    #[arg(long)]
    trace: bool,
}

fn main() {
    let args = Args::parse();
    if args.trace {
        init_tracing();
    }

    let graph: Graph<String> = Graph::from_unweighted_edges(
        SAMPLE_EDGES
            .iter()
            .map(|(start, finish)| (start.to_string(), finish.to_string())),
    );
    println!("{graph}");

    let mut order = Vec::new();
    let walked = Search::from(args.search).walk(&graph, args.start.clone(), |vertex| {
        print!("{vertex} ");
        order.push(vertex.clone());
        *vertex == args.target
    });
    println!();

    match walked {
        Ok(true) => match trace_back(&graph, &order, &args.target) {
            Some(path) => println!("{path:?}"),
            None => println!("no path to {}", args.target),
        },
        Ok(false) => println!("{} is not reachable from {}", args.target, args.start),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
