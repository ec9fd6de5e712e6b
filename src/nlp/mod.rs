//! Text normalization and tokenization

pub mod normalize;

pub use normalize::{normalize, tokenize};
