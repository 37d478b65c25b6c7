#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::OnceLock;

use hkm_matching::{Config, MatchingEngine};

pub fn init_test_logger() {
    static INIT: OnceLock<()> = OnceLock::new();
    let _ = INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Builds an engine and inserts every edge, panicking on any rejection.
pub fn engine_from(
    left: usize,
    right: usize,
    edges: &[(usize, usize)],
    config: Config,
) -> MatchingEngine {
    let mut engine = MatchingEngine::with_config(left, right, config);
    for &(u, v) in edges {
        engine
            .add_edge(u, v)
            .unwrap_or_else(|e| panic!("fixture edge rejected: {e}"));
    }
    engine
}

/// Exhaustive maximum matching size; only for tiny graphs.
pub fn brute_force_maximum(left: usize, right: usize, edges: &[(usize, usize)]) -> usize {
    let mut adjacency = vec![Vec::new(); left + 1];
    for &(u, v) in edges {
        adjacency[u].push(v);
    }
    let mut used = vec![false; right + 1];
    best_from(1, &adjacency, &mut used)
}

fn best_from(u: usize, adjacency: &[Vec<usize>], used: &mut [bool]) -> usize {
    if u >= adjacency.len() {
        return 0;
    }
    let mut best = best_from(u + 1, adjacency, used);
    for &v in &adjacency[u] {
        if used[v] {
            continue;
        }
        used[v] = true;
        best = best.max(1 + best_from(u + 1, adjacency, used));
        used[v] = false;
    }
    best
}

/// Checks that the engine's pairs form a matching over the given edges.
pub fn check_valid_matching(
    engine: &MatchingEngine,
    edges: &[(usize, usize)],
) -> Result<(), String> {
    let edge_set: HashSet<(usize, usize)> = edges.iter().copied().collect();
    let pairs = engine.matched_pairs();

    let mut lefts = HashSet::new();
    let mut rights = HashSet::new();
    for (u, v) in &pairs {
        let (u, v) = (u.get(), v.get());
        if !(1..=engine.left_count()).contains(&u) || !(1..=engine.right_count()).contains(&v) {
            return Err(format!("pair ({u}, {v}) out of bounds"));
        }
        if !edge_set.contains(&(u, v)) {
            return Err(format!("pair ({u}, {v}) is not an edge"));
        }
        if !lefts.insert(u) || !rights.insert(v) {
            return Err(format!("pair ({u}, {v}) reuses a vertex"));
        }
    }

    if !pairs.windows(2).all(|w| w[0].0 < w[1].0) {
        return Err("pairs not sorted by left vertex".to_string());
    }
    if pairs.len() != engine.matching().len() {
        return Err(format!(
            "{} pairs but matching size {}",
            pairs.len(),
            engine.matching().len()
        ));
    }
    Ok(())
}
