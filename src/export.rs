//! Graph and rank export
//!
//! Textual renderings meant for external tools: a Graphviz DOT digraph of
//! the adjacency structure, a two-column CSV of rank values, and a JSON
//! rendering of the rank table. Vertices and edges appear in ascending
//! lexicographic order; CSV rows are sorted by rank, highest first.

use crate::errors::Result;
use crate::graph::WordGraph;
use crate::types::RankTable;
use std::io::{self, Write};

/// Render the graph as a Graphviz DOT digraph.
///
/// One `"src" -> "dest" [label="weight"];` line per edge, with box-shaped
/// light-blue nodes and gray edges, ready for `dot -Tpng`.
pub fn graph_to_dot(graph: &WordGraph, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("digraph {name} {{\n"));
    out.push_str("  node [shape=box, style=filled, fillcolor=lightblue];\n");
    out.push_str("  edge [color=gray];\n");

    for word in graph.words() {
        for (dest, weight) in graph.successors(word) {
            out.push_str(&format!("  \"{word}\" -> \"{dest}\" [label=\"{weight}\"];\n"));
        }
    }

    out.push_str("}\n");
    out
}

/// Write the DOT rendering to a writer
pub fn write_dot<W: Write>(graph: &WordGraph, name: &str, writer: &mut W) -> io::Result<()> {
    writer.write_all(graph_to_dot(graph, name).as_bytes())
}

/// Render a rank table as CSV: a `word,pagerank` header, then one row per
/// vertex sorted by rank descending (ties broken by word), values to six
/// decimal places.
pub fn rank_to_csv(ranks: &RankTable) -> String {
    let mut rows: Vec<(&str, f64)> = ranks.iter().map(|(w, &r)| (w.as_str(), r)).collect();
    rows.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut out = String::from("word,pagerank\n");
    for (word, rank) in rows {
        out.push_str(&format!("{word},{rank:.6}\n"));
    }
    out
}

/// Write the CSV rendering to a writer
pub fn write_rank_csv<W: Write>(ranks: &RankTable, writer: &mut W) -> io::Result<()> {
    writer.write_all(rank_to_csv(ranks).as_bytes())
}

/// Render a rank table as pretty-printed JSON
pub fn rank_to_json(ranks: &RankTable) -> Result<String> {
    Ok(serde_json::to_string_pretty(ranks)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> WordGraph {
        let mut graph = WordGraph::new();
        graph.build_from_text("to explore the strange new worlds to explore");
        graph
    }

    #[test]
    fn test_dot_structure() {
        let dot = graph_to_dot(&sample_graph(), "TextGraph");

        assert!(dot.starts_with("digraph TextGraph {\n"));
        assert!(dot.contains("node [shape=box, style=filled, fillcolor=lightblue];"));
        assert!(dot.contains("edge [color=gray];"));
        assert!(dot.contains("  \"to\" -> \"explore\" [label=\"2\"];\n"));
        assert!(dot.contains("  \"explore\" -> \"the\" [label=\"1\"];\n"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_dot_edges_in_lexicographic_order() {
        let dot = graph_to_dot(&sample_graph(), "G");
        let explore_line = dot.find("\"explore\" ->").unwrap();
        let to_line = dot.find("\"to\" ->").unwrap();
        assert!(explore_line < to_line);
    }

    #[test]
    fn test_empty_graph_dot_has_no_edges() {
        let dot = graph_to_dot(&WordGraph::new(), "Empty");
        assert!(dot.contains("digraph Empty"));
        assert!(!dot.contains("->"));
    }

    #[test]
    fn test_csv_sorted_by_rank_descending() {
        let mut ranks = RankTable::new();
        ranks.insert("low".to_string(), 0.1);
        ranks.insert("high".to_string(), 0.7);
        ranks.insert("mid".to_string(), 0.2);

        let csv = rank_to_csv(&ranks);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "word,pagerank");
        assert_eq!(lines[1], "high,0.700000");
        assert_eq!(lines[2], "mid,0.200000");
        assert_eq!(lines[3], "low,0.100000");
    }

    #[test]
    fn test_csv_writer_variant_matches_string() {
        let mut ranks = RankTable::new();
        ranks.insert("only".to_string(), 1.0);

        let mut buffer = Vec::new();
        write_rank_csv(&ranks, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), rank_to_csv(&ranks));
    }

    #[test]
    fn test_rank_json_round_trips() {
        let mut ranks = RankTable::new();
        ranks.insert("word".to_string(), 0.25);

        let json = rank_to_json(&ranks).unwrap();
        let parsed: RankTable = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ranks);
    }
}
