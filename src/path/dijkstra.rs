//! Dijkstra shortest paths
//!
//! Edge cost is the raw observation count; a heavily observed transition is
//! a *longer* hop, not a shorter one. Weights are positive integers, so
//! distances stay exact in `u64` until they surface as `f64`.
//!
//! Determinism: among equal tentative distances the frontier pops the
//! lexicographically smallest word first, and relaxation scans successors in
//! lexicographic order, so tie paths reconstruct identically run to run.

use crate::graph::WordGraph;
use crate::nlp::normalize;
use crate::types::{FoundPath, PathOutcome};
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

const INF: u64 = u64::MAX;

/// Shortest path from `start` to `end`.
///
/// Endpoints are normalized first. Missing endpoints report as
/// [`PathOutcome::MissingWord`]; two present but disconnected endpoints as
/// [`PathOutcome::Unreachable`]. `start == end` yields distance 0 and the
/// single-vertex path. The search stops as soon as `end` is finalized.
pub fn shortest_path(graph: &WordGraph, start: &str, end: &str) -> PathOutcome {
    let start = normalize(start);
    let end = normalize(end);

    let Some(src) = graph.vertex_id(&start) else {
        return PathOutcome::MissingWord(start);
    };
    let Some(dest) = graph.vertex_id(&end) else {
        return PathOutcome::MissingWord(end);
    };

    let search = Search::run(graph, src, Some(dest));
    match search.path_to(graph, src, dest) {
        Some(path) => PathOutcome::Found(path),
        None => PathOutcome::Unreachable,
    }
}

/// Shortest paths from `start` to every reachable vertex.
///
/// Returns an empty map when `start` (after normalization) is absent.
/// Unreachable destinations are simply absent from the map, and `start`
/// itself is excluded. One full Dijkstra run serves all destinations; the
/// lexicographic tie-break makes each entry identical to what the pairwise
/// query would return.
pub fn shortest_paths_from_source(graph: &WordGraph, start: &str) -> BTreeMap<String, FoundPath> {
    let start = normalize(start);
    let mut result = BTreeMap::new();

    let Some(src) = graph.vertex_id(&start) else {
        return result;
    };

    let search = Search::run(graph, src, None);
    for id in graph.sorted_ids() {
        if id == src {
            continue;
        }
        if let Some(path) = search.path_to(graph, src, id) {
            result.insert(graph.word_of(id).to_string(), path);
        }
    }
    result
}

/// Finished single-source search state
struct Search {
    dist: Vec<u64>,
    prev: Vec<Option<u32>>,
}

impl Search {
    fn run(graph: &WordGraph, src: u32, target: Option<u32>) -> Self {
        let n = graph.vertex_count();
        let mut dist = vec![INF; n];
        let mut prev: Vec<Option<u32>> = vec![None; n];
        let mut settled = vec![false; n];

        // Lexicographic rank per vertex id, for deterministic tie-breaking
        // inside the heap.
        let sorted = graph.sorted_ids();
        let mut lex_rank = vec![0u32; n];
        for (rank, &id) in sorted.iter().enumerate() {
            lex_rank[id as usize] = rank as u32;
        }

        let mut heap = BinaryHeap::new();
        dist[src as usize] = 0;
        heap.push(Reverse((0u64, lex_rank[src as usize], src)));

        while let Some(Reverse((d, _, id))) = heap.pop() {
            if settled[id as usize] {
                continue;
            }
            settled[id as usize] = true;

            if target == Some(id) {
                break;
            }

            for next in graph.sorted_successor_ids(id) {
                let weight = graph.out_edges(id)[&next];
                let alt = d + weight;
                if alt < dist[next as usize] {
                    dist[next as usize] = alt;
                    prev[next as usize] = Some(id);
                    heap.push(Reverse((alt, lex_rank[next as usize], next)));
                }
            }
        }

        Self { dist, prev }
    }

    /// Reconstruct the path `src → dest`, if `dest` was reached
    fn path_to(&self, graph: &WordGraph, src: u32, dest: u32) -> Option<FoundPath> {
        if self.dist[dest as usize] == INF {
            return None;
        }

        let mut words = Vec::new();
        let mut current = dest;
        while current != src {
            words.push(graph.word_of(current).to_string());
            current = self.prev[current as usize]?;
        }
        words.push(graph.word_of(src).to_string());
        words.reverse();

        Some(FoundPath {
            distance: self.dist[dest as usize] as f64,
            words,
        })
    }
}
