#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

mod common;

use common::{brute_force_maximum, check_valid_matching, engine_from};
use hkm_matching::{Config, EdgePolicy, MatchingEngine, Traversal};
use quickcheck::{Arbitrary, Gen, TestResult, quickcheck};

/// A random bipartite graph small enough for exhaustive search.
#[derive(Clone, Debug)]
struct SmallGraph {
    left: usize,
    right: usize,
    edges: Vec<(usize, usize)>,
}

impl Arbitrary for SmallGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let left = usize::arbitrary(g) % 7;
        let right = usize::arbitrary(g) % 7;
        let edges = if left == 0 || right == 0 {
            Vec::new()
        } else {
            let count = usize::arbitrary(g) % 16;
            (0..count)
                .map(|_| {
                    (
                        usize::arbitrary(g) % left + 1,
                        usize::arbitrary(g) % right + 1,
                    )
                })
                .collect()
        };
        Self { left, right, edges }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let (left, right) = (self.left, self.right);
        Box::new(self.edges.shrink().map(move |edges| Self { left, right, edges }))
    }
}

fn build(graph: &SmallGraph, config: Config) -> MatchingEngine {
    engine_from(graph.left, graph.right, &graph.edges, config)
}

quickcheck! {
    fn prop_size_matches_brute_force(graph: SmallGraph) -> bool {
        let mut engine = build(&graph, Config::default());
        engine.compute_maximum_matching()
            == brute_force_maximum(graph.left, graph.right, &graph.edges)
    }

    fn prop_pairs_form_valid_matching(graph: SmallGraph) -> TestResult {
        let mut engine = build(&graph, Config::default());
        let size = engine.compute_maximum_matching();
        if engine.matched_pairs().len() != size {
            return TestResult::failed();
        }
        match check_valid_matching(&engine, &graph.edges) {
            Ok(()) => TestResult::passed(),
            Err(msg) => TestResult::error(msg),
        }
    }

    fn prop_recompute_is_idempotent(graph: SmallGraph) -> bool {
        let mut engine = build(&graph, Config::default());
        let first = engine.compute_maximum_matching();
        let pairs = engine.matched_pairs();
        let second = engine.compute_maximum_matching();
        first == second && pairs == engine.matched_pairs()
    }

    fn prop_extra_edge_never_shrinks(graph: SmallGraph, extra: (usize, usize)) -> TestResult {
        if graph.left == 0 || graph.right == 0 {
            return TestResult::discard();
        }
        let edge = (extra.0 % graph.left + 1, extra.1 % graph.right + 1);

        let mut without = build(&graph, Config::default());
        let mut with = build(&graph, Config::default());
        with.add_edge(edge.0, edge.1).unwrap();

        TestResult::from_bool(with.compute_maximum_matching() >= without.compute_maximum_matching())
    }

    fn prop_traversals_agree(graph: SmallGraph) -> bool {
        let mut iterative = build(&graph, Config::builder().traversal(Traversal::Iterative).build());
        let mut recursive = build(&graph, Config::builder().traversal(Traversal::Recursive).build());
        iterative.compute_maximum_matching() == recursive.compute_maximum_matching()
            && iterative.matched_pairs() == recursive.matched_pairs()
            && iterative.last_run() == recursive.last_run()
    }

    fn prop_dedupe_keeps_size(graph: SmallGraph) -> bool {
        let mut kept = build(&graph, Config::default());
        let mut deduped = build(&graph, Config::builder().edges(EdgePolicy::Dedupe).build());
        kept.compute_maximum_matching() == deduped.compute_maximum_matching()
    }

    fn prop_incremental_matches_batch(graph: SmallGraph) -> bool {
        // Computing after every insertion ends at the same size as computing once.
        let mut batch = build(&graph, Config::default());
        let mut incremental = MatchingEngine::new(graph.left, graph.right);
        for &(u, v) in &graph.edges {
            incremental.add_edge(u, v).unwrap();
            incremental.compute_maximum_matching();
        }
        incremental.compute_maximum_matching() == batch.compute_maximum_matching()
            && incremental.matching().is_consistent()
    }

    fn prop_phase_count_is_bounded(graph: SmallGraph) -> bool {
        let mut engine = build(&graph, Config::default());
        let size = engine.compute_maximum_matching();
        let root = (size as f64).sqrt().ceil() as usize;
        engine.last_run().phases <= 2 * root + 2
    }
}
