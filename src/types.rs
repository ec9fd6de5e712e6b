//! Core types for textgraph
//!
//! Query results are tagged enums rather than sentinel values, so callers can
//! tell "no results" apart from "word not in the graph" without re-checking
//! membership themselves. Flat accessors (`words`, `found`) recover the
//! collection-shaped view when the distinction doesn't matter.

use crate::errors::{Result, TextGraphError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A probability distribution over vertices, keyed by word.
///
/// After normalization the values sum to 1.0 within floating-point tolerance.
/// `BTreeMap` keeps iteration in ascending lexicographic word order.
pub type RankTable = BTreeMap<String, f64>;

// ============================================================================
// Shortest-path results
// ============================================================================

/// A concrete shortest path between two vertices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundPath {
    /// Total distance (sum of traversed edge weights)
    pub distance: f64,
    /// Vertices from source to destination inclusive
    pub words: Vec<String>,
}

/// Outcome of a single-pair shortest-path query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PathOutcome {
    /// A path exists
    Found(FoundPath),
    /// Both endpoints exist but no directed path connects them
    Unreachable,
    /// An endpoint (given in normalized form) is not a vertex
    MissingWord(String),
}

impl PathOutcome {
    /// The path, if one was found
    pub fn found(&self) -> Option<&FoundPath> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }

    /// Consume the outcome, returning the path if one was found
    pub fn into_found(self) -> Option<FoundPath> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

// ============================================================================
// Bridge-word results
// ============================================================================

/// Outcome of a bridge-word query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BridgeOutcome {
    /// Both endpoints exist; the (possibly empty) bridge words in ascending
    /// lexicographic order, each listed once
    Bridges(Vec<String>),
    /// An endpoint (given in normalized form) is not a vertex
    MissingWord(String),
}

impl BridgeOutcome {
    /// Flat view: the bridge words, or an empty slice when an endpoint was
    /// missing. Collapses the two empty cases the way the tagged variants
    /// exist to distinguish; use pattern matching when that matters.
    pub fn words(&self) -> &[String] {
        match self {
            Self::Bridges(words) => words,
            Self::MissingWord(_) => &[],
        }
    }

    /// Consume the outcome, returning the bridge words (empty on a miss)
    pub fn into_words(self) -> Vec<String> {
        match self {
            Self::Bridges(words) => words,
            Self::MissingWord(_) => Vec::new(),
        }
    }
}

// ============================================================================
// Rank configuration
// ============================================================================

/// PageRank parameters.
///
/// The engine itself never clamps or rejects these; out-of-range values are
/// the caller's responsibility. `validate` is offered for callers that want a
/// check before running.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Damping factor, conventionally 0.85
    pub damping: f64,
    /// Fixed iteration count; there is no convergence-threshold early exit
    pub iterations: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            iterations: 100,
        }
    }
}

impl RankConfig {
    /// Check that the parameters are in their meaningful ranges
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(TextGraphError::invalid_config(format!(
                "damping must be in [0, 1], got {}",
                self.damping
            )));
        }
        if self.iterations == 0 {
            return Err(TextGraphError::invalid_config(
                "iterations must be at least 1",
            ));
        }
        Ok(())
    }
}
