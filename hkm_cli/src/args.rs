//! Command-line arguments and their mapping onto the engine [`Config`].

use std::path::PathBuf;

use clap::Parser;
use hkm_matching::{Config, EdgePolicy, Traversal};

/// Hopcroft–Karp maximum bipartite matching
///
/// Reads `n m e` followed by `e` edges `u v` (1-based) and prints a maximum matching.
#[derive(Parser, Debug)]
#[command(name = "hkm")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Read the graph from this file instead of stdin
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    pub format: FormatArg,

    /// Depth-first formulation used during augmentation
    #[arg(long, value_enum, default_value = "iterative")]
    pub traversal: TraversalArg,

    /// Ignore repeated edges instead of storing them again
    #[arg(long, default_value_t = false)]
    pub dedupe_edges: bool,
}

impl Args {
    /// Convert command-line arguments into engine configuration
    pub fn to_config(&self) -> Config {
        let edges = if self.dedupe_edges {
            EdgePolicy::Dedupe
        } else {
            EdgePolicy::KeepDuplicates
        };

        Config::builder()
            .traversal(self.traversal.clone().into())
            .edges(edges)
            .build()
    }
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatArg {
    /// Human-readable summary
    #[value(name = "text")]
    Text,
    /// `{"size": N, "pairs": [[u, v], ...]}`
    #[value(name = "json")]
    Json,
}

/// Command-line argument wrapper for Traversal
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum TraversalArg {
    /// Explicit stack
    #[value(name = "iterative")]
    Iterative,
    /// Native recursion
    #[value(name = "recursive")]
    Recursive,
}

impl From<TraversalArg> for Traversal {
    fn from(arg: TraversalArg) -> Self {
        match arg {
            TraversalArg::Iterative => Traversal::Iterative,
            TraversalArg::Recursive => Traversal::Recursive,
        }
    }
}
