//! MeSH term type.
//!
//! This module provides the `Term` struct representing one lexical variant
//! of a concept.

use crate::MeshUi;

/// A lexical variant belonging to a concept.
///
/// Terms are carried in export order; the first term of a preferred
/// concept is the descriptor's preferred label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Term {
    /// Unique identifier of this term.
    pub id: MeshUi,
    /// The term text.
    pub name: String,
}
