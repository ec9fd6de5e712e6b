//! Randomized edge-following walks
//!
//! A walk starts at a uniformly random vertex and follows uniformly random
//! outgoing edges until it either reaches a vertex with no outgoing edges or
//! would re-traverse a directed edge it already used in this walk (it stops
//! *before* re-crossing). Since each edge is used at most once, a walk takes
//! at most edge-count + 1 steps.

use crate::graph::WordGraph;
use crate::rng::RandomSource;
use rustc_hash::FxHashSet;
use tracing::trace;

/// Stateful random walker over a [`WordGraph`]
#[derive(Debug)]
pub struct RandomWalker<R: RandomSource> {
    rng: R,
}

impl<R: RandomSource> RandomWalker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Perform one walk, returning the visited vertices in order.
    ///
    /// An empty graph yields an empty path. Vertex and edge choices index
    /// into lexicographically ordered views, so a seeded source reproduces
    /// the same walk on the same graph.
    pub fn walk(&mut self, graph: &WordGraph) -> Vec<String> {
        if graph.is_empty() {
            return Vec::new();
        }

        let vertices = graph.sorted_ids();
        let mut current = vertices[self.rng.next_index(vertices.len())];

        let mut path = vec![graph.word_of(current).to_string()];
        let mut visited_edges: FxHashSet<(u32, u32)> = FxHashSet::default();

        loop {
            let successors = graph.sorted_successor_ids(current);
            if successors.is_empty() {
                break;
            }

            let next = successors[self.rng.next_index(successors.len())];
            if !visited_edges.insert((current, next)) {
                break;
            }

            current = next;
            path.push(graph.word_of(current).to_string());
        }

        trace!(steps = path.len(), "random walk finished");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{seeded, ScriptedSource};

    fn graph_of(text: &str) -> WordGraph {
        let mut graph = WordGraph::new();
        graph.build_from_text(text);
        graph
    }

    #[test]
    fn test_empty_graph_walks_nowhere() {
        let graph = WordGraph::new();
        let mut walker = RandomWalker::new(seeded(1));
        assert!(walker.walk(&graph).is_empty());
    }

    #[test]
    fn test_chain_walk_is_fully_scripted() {
        // Vertices sorted: [a, b, c]; start at index 0, single choices after
        let graph = graph_of("a b c");
        let mut walker = RandomWalker::new(ScriptedSource::new([0, 0, 0]));
        assert_eq!(walker.walk(&graph), ["a", "b", "c"]);
    }

    #[test]
    fn test_dangling_start_gives_single_vertex_path() {
        let graph = graph_of("a b c");
        // Index 2 of sorted vertices is "c", which has no outgoing edges
        let mut walker = RandomWalker::new(ScriptedSource::new([2]));
        assert_eq!(walker.walk(&graph), ["c"]);
    }

    #[test]
    fn test_stops_before_repeating_an_edge() {
        // Two-cycle: x → y → x; the second x → y would repeat
        let graph = graph_of("x y x");
        let mut walker = RandomWalker::new(ScriptedSource::new([0, 0, 0, 0]));
        assert_eq!(walker.walk(&graph), ["x", "y", "x"]);
    }

    #[test]
    fn test_no_repeated_edges_with_entropy() {
        let graph =
            graph_of("to explore the strange new worlds to seek the new life and new civilizations");

        for seed in 0..50 {
            let mut walker = RandomWalker::new(seeded(seed));
            let path = walker.walk(&graph);
            assert!(!path.is_empty());
            assert!(path.len() <= graph.edge_count() + 1);

            let mut edges_seen = FxHashSet::default();
            for pair in path.windows(2) {
                assert!(
                    edges_seen.insert((pair[0].clone(), pair[1].clone())),
                    "edge {} -> {} repeated (seed {seed})",
                    pair[0],
                    pair[1]
                );
                // Every traversed edge exists in the graph
                assert!(graph.weight(&pair[0], &pair[1]).is_some());
            }
        }
    }

    #[test]
    fn test_seeded_walks_are_reproducible() {
        let graph = graph_of("to explore the strange new worlds to seek the new life");
        let mut first = RandomWalker::new(seeded(99));
        let mut second = RandomWalker::new(seeded(99));
        assert_eq!(first.walk(&graph), second.walk(&graph));
    }
}
