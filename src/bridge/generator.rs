//! Bridge-augmented text rewriting
//!
//! Walks consecutive word pairs of an input text and splices a randomly
//! chosen bridge word between each pair that has one. The output is a single
//! space-joined line of normalized words; original casing and punctuation do
//! not survive.

use crate::bridge::find_bridge_words;
use crate::graph::WordGraph;
use crate::nlp::normalize;
use crate::rng::RandomSource;
use crate::types::BridgeOutcome;

/// Rewrites text by inserting bridge words drawn from a [`WordGraph`]
#[derive(Debug)]
pub struct TextBridger<'g, R: RandomSource> {
    graph: &'g WordGraph,
    rng: R,
}

impl<'g, R: RandomSource> TextBridger<'g, R> {
    pub fn new(graph: &'g WordGraph, rng: R) -> Self {
        Self { graph, rng }
    }

    /// Generate the bridge-augmented form of `text`.
    ///
    /// The input is split on whitespace and normalized; empty tokens are
    /// discarded. With fewer than two usable tokens the original input is
    /// returned unchanged. For each consecutive pair, one bridge word (when
    /// any exist) is chosen uniformly at random and inserted between them.
    pub fn generate(&mut self, text: &str) -> String {
        let words: Vec<String> = text
            .split_whitespace()
            .map(normalize)
            .filter(|word| !word.is_empty())
            .collect();

        if words.len() < 2 {
            return text.to_string();
        }

        let mut result = vec![words[0].clone()];
        for pair in words.windows(2) {
            if let BridgeOutcome::Bridges(bridges) =
                find_bridge_words(self.graph, &pair[0], &pair[1])
            {
                if !bridges.is_empty() {
                    let pick = self.rng.next_index(bridges.len());
                    result.push(bridges[pick].clone());
                }
            }
            result.push(pair[1].clone());
        }

        result.join(" ")
    }
}
