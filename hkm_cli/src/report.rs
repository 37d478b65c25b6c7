//! Printing the computed matching.

use std::io::{self, Write};

use hkm_matching::{LeftVertex, MatchingEngine, RightVertex};
use serde::Serialize;

const RULE: &str = "=======================================";

/// Matching size and pairs, as printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchingReport {
    /// Number of matched pairs.
    pub size: usize,
    /// Matched pairs in increasing left id order.
    pub pairs: Vec<(LeftVertex, RightVertex)>,
}

impl MatchingReport {
    /// Snapshots the engine's current matching.
    pub fn from_engine(engine: &MatchingEngine) -> Self {
        Self {
            size: engine.matching().len(),
            pairs: engine.matched_pairs(),
        }
    }

    /// Writes the ruled, human-readable block.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn write_text(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "Maximum Matching Size: {}", self.size)?;
        writeln!(out)?;
        writeln!(out, "Matched Pairs:")?;
        for (u, v) in &self.pairs {
            writeln!(out, "  Left {:>2}  <->  Right {:>2}", u.get(), v.get())?;
        }
        writeln!(out, "{RULE}")
    }

    /// Writes `{"size":..,"pairs":[[u,v],..]}` followed by a newline.
    ///
    /// # Errors
    ///
    /// Propagates serialization and write failures.
    pub fn write_json(&self, out: &mut impl Write) -> Result<(), serde_json::Error> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out).map_err(serde_json::Error::io)
    }
}
