//! TF-IDF rank seeding
//!
//! Scores graph vertices against the *raw* input text (pre-normalization
//! line structure), producing a normalized distribution suitable as a
//! PageRank seed. Each non-empty line counts as one document.
//!
//! Single-line inputs get no meaningful document-frequency signal, so the
//! line is re-split into fixed-length virtual documents. This is a heuristic,
//! not a guaranteed statistic: scores for the same text differ depending on
//! where its line breaks fall.

use crate::graph::WordGraph;
use crate::nlp::normalize;
use crate::types::RankTable;
use rustc_hash::{FxHashMap, FxHashSet};

/// Number of tokens per virtual document when the input is a single line
const DEFAULT_WINDOW_TOKENS: usize = 5;

/// Score assigned to vertices never observed as terms, pre-normalization
const UNSEEN_VERTEX_SCORE: f64 = 0.5;

/// Floor for non-positive TF-IDF products, pre-normalization
const SCORE_FLOOR: f64 = 0.1;

/// Computes TF-IDF scores for graph vertices from raw text
#[derive(Debug, Clone)]
pub struct TfIdfEstimator {
    window_tokens: usize,
}

impl Default for TfIdfEstimator {
    fn default() -> Self {
        Self {
            window_tokens: DEFAULT_WINDOW_TOKENS,
        }
    }
}

impl TfIdfEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the virtual-document window length
    pub fn with_window_tokens(mut self, window_tokens: usize) -> Self {
        self.window_tokens = window_tokens;
        self
    }

    /// Compute the normalized TF-IDF distribution over the graph's vertices.
    ///
    /// For a vertex with term frequency `tf` and document frequency `df`:
    /// `tf · ln(docs / df)` when `df > 0` and more than one document exists,
    /// falling back to raw `tf`, floored at 0.1 when non-positive. Vertices
    /// never observed in the text score 0.5 pre-normalization. The final
    /// table sums to 1.0; a degenerate zero sum falls back to uniform.
    /// Text with no content yields an empty table.
    pub fn ranks(&self, graph: &WordGraph, raw_text: &str) -> RankTable {
        let documents = self.split_documents(raw_text);
        if documents.is_empty() {
            return RankTable::new();
        }
        let num_docs = documents.len();

        let mut term_frequency: FxHashMap<String, u64> = FxHashMap::default();
        let mut doc_frequency: FxHashMap<String, u64> = FxHashMap::default();

        for document in &documents {
            let mut unique_in_doc: FxHashSet<&str> = FxHashSet::default();
            for word in document {
                *term_frequency.entry(word.clone()).or_insert(0) += 1;
                unique_in_doc.insert(word);
            }
            for word in unique_in_doc {
                *doc_frequency.entry(word.to_string()).or_insert(0) += 1;
            }
        }

        let mut table = RankTable::new();
        for word in graph.words() {
            let score = match term_frequency.get(word) {
                Some(&tf) => {
                    let tf = tf as f64;
                    let df = doc_frequency.get(word).copied().unwrap_or(0);
                    let raw = if df > 0 && num_docs > 1 {
                        tf * (num_docs as f64 / df as f64).ln()
                    } else {
                        tf
                    };
                    if raw <= 0.0 {
                        SCORE_FLOOR
                    } else {
                        raw
                    }
                }
                None => UNSEEN_VERTEX_SCORE,
            };
            table.insert(word.to_string(), score);
        }

        let sum: f64 = table.values().sum();
        if sum > 0.0 {
            for score in table.values_mut() {
                *score /= sum;
            }
        } else if !table.is_empty() {
            let uniform = 1.0 / table.len() as f64;
            for score in table.values_mut() {
                *score = uniform;
            }
        }

        table
    }

    /// Split raw text into documents of normalized words.
    ///
    /// Non-empty lines are documents; a lone line is re-split into
    /// `window_tokens`-sized virtual documents so document frequencies carry
    /// some signal.
    fn split_documents(&self, raw_text: &str) -> Vec<Vec<String>> {
        let lines: Vec<&str> = raw_text.lines().filter(|line| !line.is_empty()).collect();

        let token_lists: Vec<Vec<String>> = if lines.len() == 1 {
            lines[0]
                .split_whitespace()
                .collect::<Vec<_>>()
                .chunks(self.window_tokens)
                .map(|chunk| chunk.iter().map(|w| normalize(w)).collect())
                .collect()
        } else {
            lines
                .iter()
                .map(|line| line.split_whitespace().map(normalize).collect())
                .collect()
        };

        token_lists
            .into_iter()
            .map(|words| words.into_iter().filter(|w| !w.is_empty()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_of(text: &str) -> WordGraph {
        let mut graph = WordGraph::new();
        graph.build_from_text(text);
        graph
    }

    #[test]
    fn test_ranks_sum_to_one() {
        let text = "to explore the strange\nnew worlds to seek\nthe new life";
        let graph = graph_of(text);
        let ranks = TfIdfEstimator::new().ranks(&graph, text);
        let sum: f64 = ranks.values().sum();
        assert!((sum - 1.0).abs() < 1e-6, "sum={sum}");
    }

    #[test]
    fn test_rarer_words_outrank_ubiquitous_ones() {
        // "alpha" appears in both documents (idf = ln 1 = 0, floored);
        // "beta" and "gamma" are confined to one document each.
        let text = "alpha beta\nalpha gamma";
        let graph = graph_of(text);
        let ranks = TfIdfEstimator::new().ranks(&graph, text);

        assert!(ranks["beta"] > ranks["alpha"]);
        assert!((ranks["beta"] - ranks["gamma"]).abs() < 1e-12);
    }

    #[test]
    fn test_floor_applied_to_zero_idf() {
        let text = "alpha beta\nalpha gamma";
        let graph = graph_of(text);
        let ranks = TfIdfEstimator::new().ranks(&graph, text);

        // alpha: tf=2, df=2, docs=2 → 2·ln(1) = 0 → floored to 0.1, then
        // normalized against beta/gamma at ln 2 each.
        let expected = 0.1 / (0.1 + 2.0 * std::f64::consts::LN_2);
        assert!((ranks["alpha"] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_single_line_splits_into_virtual_documents() {
        // Seven tokens, window 5 → two virtual documents
        let text = "one two three four five six seven";
        let graph = graph_of(text);
        let ranks = TfIdfEstimator::new().ranks(&graph, text);

        // Every word: tf=1, df=1, docs=2 → ln 2 each → uniform distribution
        let uniform = 1.0 / graph.vertex_count() as f64;
        for (word, score) in &ranks {
            assert!((score - uniform).abs() < 1e-12, "word={word} score={score}");
        }
    }

    #[test]
    fn test_vertex_absent_from_text_gets_unseen_floor() {
        // Graph built from more text than the scored excerpt
        let graph = graph_of("alpha beta gamma");
        let ranks = TfIdfEstimator::new().ranks(&graph, "alpha beta\nalpha beta");

        assert_eq!(ranks.len(), graph.vertex_count());
        // gamma was never observed: unseen score 0.5 pre-normalization,
        // against alpha (tf 2 → floored 0.1) and beta (same)
        let expected = 0.5 / (0.1 + 0.1 + 0.5);
        assert!((ranks["gamma"] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_empty_text_yields_empty_table() {
        let graph = graph_of("alpha beta");
        assert!(TfIdfEstimator::new().ranks(&graph, "").is_empty());
        assert!(TfIdfEstimator::new().ranks(&graph, "\n\n").is_empty());
    }

    #[test]
    fn test_empty_graph_yields_empty_table() {
        let graph = WordGraph::new();
        let ranks = TfIdfEstimator::new().ranks(&graph, "some words here");
        assert!(ranks.is_empty());
    }
}
