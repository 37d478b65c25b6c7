//! One run of the tool: read a graph, match it, print the result.

use std::io::{BufRead, Write};

use hkm_matching::{Config, MatchingEngine};
use tracing::{info, warn};

use crate::args::FormatArg;
use crate::error::CliError;
use crate::input::{Header, RawEdge, TokenReader};
use crate::report::MatchingReport;

/// Reads the header and edges from `tokens`, computes the matching and writes it to `out`.
///
/// Prompts go to `prompt` when given. Out-of-range edges are logged and
/// skipped; any other input problem ends the run.
///
/// # Errors
///
/// Returns the first header, edge-list, or output failure.
pub fn solve<R: BufRead, W: Write>(
    tokens: &mut TokenReader<R>,
    mut prompt: Option<&mut dyn Write>,
    out: &mut W,
    config: Config,
    format: FormatArg,
) -> Result<MatchingReport, CliError> {
    if let Some(p) = prompt.as_deref_mut() {
        write!(p, "Enter number of left vertices, right vertices, and edges: ")?;
        p.flush()?;
    }
    let header = Header::read(tokens)?;
    info!(
        "Reading {} edges for a {}x{} graph",
        header.edge_count, header.left_count, header.right_count
    );

    let mut engine = MatchingEngine::with_config(header.left_count, header.right_count, config);

    if let Some(p) = prompt.as_deref_mut() {
        writeln!(p, "Enter {} edges (u v):", header.edge_count)?;
    }
    let mut skipped = 0usize;
    for _ in 0..header.edge_count {
        let edge = RawEdge::read(tokens)?;
        let added = edge
            .endpoints()
            .is_some_and(|(u, v)| engine.add_edge(u, v).is_ok());
        if !added {
            warn!("Invalid edge ({}, {}), skipping", edge.left, edge.right);
            skipped += 1;
        }
    }
    if skipped > 0 {
        info!("Skipped {} invalid edges", skipped);
    }

    engine.compute_maximum_matching();
    let report = MatchingReport::from_engine(&engine);

    match format {
        FormatArg::Text => report.write_text(out)?,
        FormatArg::Json => report.write_json(out)?,
    }
    Ok(report)
}
