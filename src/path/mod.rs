//! Shortest paths over the word graph

pub mod dijkstra;

pub use dijkstra::{shortest_path, shortest_paths_from_source};
