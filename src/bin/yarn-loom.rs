use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::*;

use yarn_loom::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Nodes as JSON
    Json,
    /// Nodes written back as Yarn text
    Yarn,
    /// One `from -> to` line per link
    Links,
    /// Link graph as CSV
    Csv,
}

#[derive(Parser)]
#[command(name = "yarn-loom", about = "Inspect the nodes and links of a Yarn file")]
struct Cli {
    /// Path to a .yarn file
    path: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Keep a final node that is missing its closing `===`
    #[arg(long)]
    flush_trailing_node: bool,

    /// Only output the node with this title
    #[arg(short, long)]
    node: Option<String>,

    /// Only output nodes containing this text
    #[arg(short, long)]
    search: Option<String>,
    #[arg(long)]
    in_title: bool,
    #[arg(long)]
    in_body: bool,
    #[arg(long)]
    in_tags: bool,
}

impl Cli {
    fn node_search(&self) -> Option<NodeSearch> {
        let text = self.search.as_ref()?;
        let mut search = NodeSearch::new(text.as_str());
        search.title = self.in_title;
        search.body = self.in_body;
        search.tags = self.in_tags;
        if !search.is_active() {
            // Searching without picking fields looks everywhere.
            search = search.in_title().in_body().in_tags();
        }
        Some(search)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();

    let cli = Cli::parse();

    let options = ParseOptions {
        flush_trailing_node: cli.flush_trailing_node,
    };
    let text = fs::read_to_string(&cli.path)?;
    let document = YarnDocument::parse_with(&text, &options);
    info!("Parsed {} nodes from {}", document.len(), cli.path.display());

    for title in document.duplicate_titles() {
        warn!("Title {:?} is used by more than one node", title);
    }

    let mut selected: Vec<&YarnNode> = match &cli.node {
        Some(title) => vec![document.require_node(title)?],
        None => document.nodes().iter().collect(),
    };
    if let Some(search) = cli.node_search() {
        selected.retain(|node| search.matches(node));
    }
    debug!("Selected {} of {} nodes", selected.len(), document.len());

    let edges = document.links_from(selected.iter().copied());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &selected)?;
            writeln!(out)?;
        }
        Format::Yarn => {
            for node in &selected {
                write!(out, "{}", write_node(node))?;
            }
        }
        Format::Links => {
            for edge in &edges {
                if edge.resolved {
                    writeln!(out, "{} -> {}", edge.from, edge.to)?;
                } else {
                    warn!("{:?} links to missing node {:?}", edge.from, edge.to);
                    writeln!(out, "{} -> {} (unresolved)", edge.from, edge.to)?;
                }
            }
        }
        Format::Csv => {
            export::write_links_csv(&edges, &mut out)?;
        }
    }

    Ok(())
}
