//! Two-hop bridge-word queries
//!
//! A bridge word `b` connects `word1` to `word2` when both directed edges
//! `word1 → b` and `b → word2` exist.

use crate::graph::WordGraph;
use crate::nlp::normalize;
use crate::types::BridgeOutcome;

/// Find every bridge word from `word1` to `word2`.
///
/// Both inputs are normalized first. If either is absent from the graph the
/// result is [`BridgeOutcome::MissingWord`] carrying the first missing word
/// in normalized form; otherwise [`BridgeOutcome::Bridges`] lists each
/// qualifying vertex once, in ascending lexicographic order.
pub fn find_bridge_words(graph: &WordGraph, word1: &str, word2: &str) -> BridgeOutcome {
    let word1 = normalize(word1);
    let word2 = normalize(word2);

    let Some(src) = graph.vertex_id(&word1) else {
        return BridgeOutcome::MissingWord(word1);
    };
    let Some(dest) = graph.vertex_id(&word2) else {
        return BridgeOutcome::MissingWord(word2);
    };

    // Successors of word1 come back sorted and deduplicated, so the bridge
    // list inherits both properties.
    let bridges = graph
        .sorted_successor_ids(src)
        .into_iter()
        .filter(|&candidate| graph.has_edge(candidate, dest))
        .map(|candidate| graph.word_of(candidate).to_string())
        .collect();

    BridgeOutcome::Bridges(bridges)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str =
        "to explore the strange new worlds to seek the new life and new civilizations";

    fn sample_graph() -> WordGraph {
        let mut graph = WordGraph::new();
        graph.build_from_text(TEXT);
        graph
    }

    #[test]
    fn test_single_bridge() {
        let graph = sample_graph();
        assert_eq!(
            find_bridge_words(&graph, "explore", "strange"),
            BridgeOutcome::Bridges(vec!["the".to_string()])
        );
    }

    #[test]
    fn test_multiple_bridges_sorted() {
        let graph = sample_graph();
        assert_eq!(
            find_bridge_words(&graph, "to", "the"),
            BridgeOutcome::Bridges(vec!["explore".to_string(), "seek".to_string()])
        );
    }

    #[test]
    fn test_no_bridges_is_empty_not_missing() {
        let graph = sample_graph();
        assert_eq!(
            find_bridge_words(&graph, "seek", "life"),
            BridgeOutcome::Bridges(Vec::new())
        );
    }

    #[test]
    fn test_missing_word_reported() {
        let graph = sample_graph();
        assert_eq!(
            find_bridge_words(&graph, "xy", "seek"),
            BridgeOutcome::MissingWord("xy".to_string())
        );
        assert_eq!(
            find_bridge_words(&graph, "strange", "xy"),
            BridgeOutcome::MissingWord("xy".to_string())
        );
        // Empty-after-normalization input is a missing word, not an error
        assert_eq!(
            find_bridge_words(&graph, "", "seek"),
            BridgeOutcome::MissingWord(String::new())
        );
    }

    #[test]
    fn test_inputs_are_normalized() {
        let graph = sample_graph();
        // "to12" normalizes to "to", which is present
        assert_eq!(
            find_bridge_words(&graph, "EXPLORE!", "Strange"),
            BridgeOutcome::Bridges(vec!["the".to_string()])
        );
        assert!(matches!(
            find_bridge_words(&graph, "to12", "seek"),
            BridgeOutcome::Bridges(_)
        ));
    }
}
