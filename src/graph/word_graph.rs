//! Weighted directed word-adjacency graph
//!
//! Vertices are interned normalized words; each node holds an `FxHashMap`
//! from destination id to weight for O(1) edge lookup and update. Algorithms
//! that need deterministic output iterate through [`WordGraph::sorted_ids`],
//! the ascending lexicographic view over vertices.

use crate::errors::{Result, TextGraphError};
use crate::nlp::{normalize, tokenize};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone)]
struct Node {
    word: String,
    /// Outgoing edges: destination id → observation count
    out: FxHashMap<u32, u64>,
}

impl Node {
    fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            out: FxHashMap::default(),
        }
    }
}

/// A weighted directed graph of consecutive-word adjacencies.
///
/// Built once (or additively, across repeated `build_from_*` calls) from a
/// complete text and then queried; vertices are never deleted and edge
/// weights only grow. Every word referenced as an edge destination is also a
/// vertex, possibly with zero outgoing edges, so traversal never dangles.
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    /// Maps word → vertex id
    index: FxHashMap<String, u32>,
    /// Vertex storage, indexed by id
    nodes: Vec<Node>,
}

impl WordGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with pre-allocated vertex capacity
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            index: FxHashMap::with_capacity_and_hasher(vertex_capacity, Default::default()),
            nodes: Vec::with_capacity(vertex_capacity),
        }
    }

    /// Get or create the vertex for an already-normalized word
    fn intern(&mut self, word: &str) -> u32 {
        if let Some(&id) = self.index.get(word) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.index.insert(word.to_string(), id);
        self.nodes.push(Node::new(word));
        id
    }

    /// Record one observation of `src` immediately followed by `dest`.
    ///
    /// Both words are expected in normalized form. The vertices are created
    /// on first sight; an existing edge has its weight incremented, a new
    /// edge starts at 1.
    pub fn add_edge(&mut self, src: &str, dest: &str) {
        let src_id = self.intern(src);
        let dest_id = self.intern(dest);
        *self.nodes[src_id as usize].out.entry(dest_id).or_insert(0) += 1;
    }

    /// Ingest raw text: tokenize, then add an edge per consecutive pair.
    ///
    /// Additive: repeated calls keep accumulating into the same adjacency
    /// structure; there is no reset.
    pub fn build_from_text(&mut self, text: &str) {
        let words = tokenize(text);
        for pair in words.windows(2) {
            self.add_edge(&pair[0], &pair[1]);
        }
        debug!(
            tokens = words.len(),
            vertices = self.vertex_count(),
            edges = self.edge_count(),
            "ingested text"
        );
    }

    /// Read a file and ingest its contents.
    ///
    /// On I/O failure the graph is left in its prior state.
    pub fn build_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|err| TextGraphError::io(path.display().to_string(), err.to_string()))?;
        self.build_from_text(&text);
        Ok(())
    }

    /// Check vertex membership; the input is normalized first
    pub fn contains_word(&self, word: &str) -> bool {
        self.index.contains_key(&normalize(word))
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct directed edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.out.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All vertex words in ascending lexicographic order
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.nodes.iter().map(|n| n.word.as_str()).collect();
        words.sort_unstable();
        words
    }

    /// The weight of the edge `src → dest`, if present; inputs are normalized
    pub fn weight(&self, src: &str, dest: &str) -> Option<u64> {
        let src_id = self.index.get(&normalize(src))?;
        let dest_id = self.index.get(&normalize(dest))?;
        self.nodes[*src_id as usize].out.get(dest_id).copied()
    }

    /// Outgoing `(destination, weight)` pairs in ascending lexicographic
    /// order of destination; empty when the word is absent
    pub fn successors(&self, word: &str) -> Vec<(&str, u64)> {
        let Some(&id) = self.index.get(&normalize(word)) else {
            return Vec::new();
        };
        let mut out: Vec<(&str, u64)> = self.nodes[id as usize]
            .out
            .iter()
            .map(|(&dest, &w)| (self.nodes[dest as usize].word.as_str(), w))
            .collect();
        out.sort_unstable_by_key(|(dest, _)| *dest);
        out
    }

    // ── id-level views used by the algorithm modules ────────────────────────

    pub(crate) fn vertex_id(&self, word: &str) -> Option<u32> {
        self.index.get(word).copied()
    }

    pub(crate) fn word_of(&self, id: u32) -> &str {
        &self.nodes[id as usize].word
    }

    pub(crate) fn out_edges(&self, id: u32) -> &FxHashMap<u32, u64> {
        &self.nodes[id as usize].out
    }

    pub(crate) fn has_edge(&self, src: u32, dest: u32) -> bool {
        self.nodes[src as usize].out.contains_key(&dest)
    }

    /// Vertex ids in ascending lexicographic order of their words
    pub(crate) fn sorted_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = (0..self.nodes.len() as u32).collect();
        ids.sort_unstable_by_key(|&id| self.nodes[id as usize].word.as_str());
        ids
    }

    /// Successor ids of `id` in ascending lexicographic order of their words
    pub(crate) fn sorted_successor_ids(&self, id: u32) -> Vec<u32> {
        let mut out: Vec<u32> = self.nodes[id as usize].out.keys().copied().collect();
        out.sort_unstable_by_key(|&dest| self.nodes[dest as usize].word.as_str());
        out
    }
}
