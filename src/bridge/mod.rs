//! Bridge-word discovery and bridge-augmented text generation

pub mod analyzer;
pub mod generator;

pub use analyzer::find_bridge_words;
pub use generator::TextBridger;
