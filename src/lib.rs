//! # textgraph
//!
//! A weighted directed word-adjacency graph engine. Free-form text is
//! ingested into a graph whose edge weights count consecutive-word
//! observations; the graph then answers a family of analysis queries.
//!
//! ## Operations
//!
//! - **Bridge words**: vertices completing a two-hop `a → b → c` connection,
//!   and text rewriting that splices them into running prose
//! - **Shortest paths**: Dijkstra over raw observation counts, single-pair
//!   and single-source
//! - **PageRank**: fixed-iteration weighted ranking with dangling-mass
//!   redistribution, optionally seeded from TF-IDF scores of the raw text
//! - **Random walks**: edge-following traversal that stops on the first
//!   repeated directed edge
//!
//! Randomized operations draw choices through an injectable
//! [`RandomSource`], so they can be seeded for reproducibility or scripted
//! in tests.
//!
//! ```
//! use textgraph::{find_bridge_words, BridgeOutcome, WordGraph};
//!
//! let mut graph = WordGraph::new();
//! graph.build_from_text("to explore the strange new worlds to seek the new life");
//!
//! let outcome = find_bridge_words(&graph, "to", "the");
//! assert_eq!(outcome, BridgeOutcome::Bridges(vec!["explore".into(), "seek".into()]));
//! ```

pub mod bridge;
pub mod errors;
pub mod export;
pub mod graph;
pub mod nlp;
pub mod path;
pub mod rank;
pub mod rng;
pub mod types;
pub mod walk;

// Re-export commonly used types
pub use errors::{Result, TextGraphError};
pub use types::{BridgeOutcome, FoundPath, PathOutcome, RankConfig, RankTable};

// Re-export main functionality
pub use bridge::{find_bridge_words, TextBridger};
pub use export::{graph_to_dot, rank_to_csv, rank_to_json, write_dot, write_rank_csv};
pub use graph::WordGraph;
pub use nlp::{normalize, tokenize};
pub use path::{shortest_path, shortest_paths_from_source};
pub use rank::{pagerank_with_tf_idf, PageRank, TfIdfEstimator};
pub use rng::{from_entropy, seeded, RandomSource, RngSource, ScriptedSource};
pub use walk::RandomWalker;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
