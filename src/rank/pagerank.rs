//! Weighted PageRank over the word graph
//!
//! Runs a fixed iteration count with no convergence-threshold early exit, so
//! numeric outputs are reproducible. Each iteration redistributes the rank
//! mass held by dangling vertices (zero outgoing edges) evenly across all
//! vertices *before* adding per-edge contributions; non-dangling vertices
//! split their damped rank across outgoing edges in proportion to edge
//! weight.

use crate::graph::WordGraph;
use crate::types::{RankConfig, RankTable};
use tracing::debug;

/// Weighted PageRank with optional custom initial distribution.
///
/// ```
/// use textgraph::{PageRank, WordGraph};
///
/// let mut graph = WordGraph::new();
/// graph.build_from_text("the quick fox jumps over the lazy dog");
/// let ranks = PageRank::new().with_damping(0.85).with_iterations(100).run(&graph);
/// let total: f64 = ranks.values().sum();
/// assert!((total - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PageRank {
    config: RankConfig,
    initial: Option<RankTable>,
}

impl PageRank {
    /// Create with default parameters (damping 0.85, 100 iterations)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from an explicit [`RankConfig`]
    pub fn with_config(config: RankConfig) -> Self {
        Self {
            config,
            initial: None,
        }
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.config.damping = damping;
        self
    }

    /// Set the fixed iteration count
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.config.iterations = iterations;
        self
    }

    /// Seed the iteration with a custom initial distribution.
    ///
    /// Vertices missing from the table default to 0.5 before the whole
    /// distribution is renormalized to sum 1. An empty table behaves like no
    /// table at all: uniform initialization.
    pub fn with_initial_ranks(mut self, initial: RankTable) -> Self {
        self.initial = Some(initial);
        self
    }

    /// Run the iteration and return the final rank table.
    ///
    /// An empty graph yields an empty table.
    pub fn run(&self, graph: &WordGraph) -> RankTable {
        let n = graph.vertex_count();
        if n == 0 {
            return RankTable::new();
        }
        let n_f64 = n as f64;
        let d = self.config.damping;

        // Vertex order is lexicographic throughout so floating-point
        // accumulation order is stable across runs.
        let ids = graph.sorted_ids();

        let mut ranks = self.initial_ranks(graph, &ids);
        let mut new_ranks = vec![0.0; n];

        // Outgoing weight sums, fixed for the whole run
        let out_wsum: Vec<f64> = (0..n)
            .map(|id| graph.out_edges(id as u32).values().sum::<u64>() as f64)
            .collect();

        debug!(
            vertices = n,
            damping = d,
            iterations = self.config.iterations,
            "running pagerank"
        );

        for _ in 0..self.config.iterations {
            let dangling_sum: f64 = ids
                .iter()
                .filter(|&&id| out_wsum[id as usize] == 0.0)
                .map(|&id| ranks[id as usize])
                .sum();

            let base = (1.0 - d) / n_f64;
            let dangling_contrib = d * dangling_sum / n_f64;
            new_ranks.fill(base + dangling_contrib);

            for &id in &ids {
                let wsum = out_wsum[id as usize];
                if wsum == 0.0 {
                    continue;
                }
                let damped = d * ranks[id as usize];
                for next in graph.sorted_successor_ids(id) {
                    let weight = graph.out_edges(id)[&next] as f64;
                    new_ranks[next as usize] += damped * (weight / wsum);
                }
            }

            std::mem::swap(&mut ranks, &mut new_ranks);
        }

        ids.into_iter()
            .map(|id| (graph.word_of(id).to_string(), ranks[id as usize]))
            .collect()
    }

    fn initial_ranks(&self, graph: &WordGraph, ids: &[u32]) -> Vec<f64> {
        let n = graph.vertex_count();

        if let Some(initial) = self.initial.as_ref().filter(|table| !table.is_empty()) {
            let mut ranks = vec![0.0; n];
            let mut sum = 0.0;
            for &id in ids {
                let value = initial.get(graph.word_of(id)).copied().unwrap_or(0.5);
                ranks[id as usize] = value;
                sum += value;
            }
            for rank in &mut ranks {
                *rank /= sum;
            }
            ranks
        } else {
            vec![1.0 / n as f64; n]
        }
    }
}

/// PageRank seeded by TF-IDF scores computed from the raw text.
///
/// Composes [`TfIdfEstimator`](crate::rank::TfIdfEstimator) with [`PageRank`],
/// using the TF-IDF table as the initial distribution.
pub fn pagerank_with_tf_idf(
    graph: &WordGraph,
    raw_text: &str,
    damping: f64,
    iterations: usize,
) -> RankTable {
    let seed = crate::rank::TfIdfEstimator::new().ranks(graph, raw_text);
    PageRank::new()
        .with_damping(damping)
        .with_iterations(iterations)
        .with_initial_ranks(seed)
        .run(graph)
}
