//! MeSH concept type.
//!
//! This module provides the `Concept` struct representing one sense of a
//! descriptor record.

use crate::{ConceptRelation, MeshUi, Term};

/// A concept of a descriptor record.
///
/// Concepts group the lexical variants (terms) of one meaning of a
/// descriptor and carry the relations to the descriptor's other concepts.
///
/// # Examples
///
/// ```
/// use mesh_types::Concept;
///
/// let concept = Concept {
///     id: "M0000001".to_string(),
///     name: "Calcimycin".to_string(),
///     preferred: true,
///     note: "An ionophorous, polyether antibiotic.".to_string(),
///     casn1_name: None,
///     terms: Vec::new(),
///     relations: Vec::new(),
/// };
///
/// assert!(concept.preferred);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Concept {
    /// Unique identifier of this concept, unique within its descriptor.
    pub id: MeshUi,
    /// Preferred name of the concept.
    pub name: String,
    /// Whether this is the descriptor's preferred concept.
    #[cfg_attr(feature = "serde", serde(rename = "isPreferred"))]
    pub preferred: bool,
    /// Scope note with trailing whitespace removed.
    pub note: String,
    /// Chemical Abstracts (CAS N1) nomenclature name, when the export
    /// carries a non-empty one.
    ///
    /// Absent values are omitted from serialized output entirely, never
    /// rendered as `null` or an empty string.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "CASN1Name", skip_serializing_if = "Option::is_none")
    )]
    pub casn1_name: Option<String>,
    /// Lexical variants of the concept, in export order.
    pub terms: Vec<Term>,
    /// Relations to the descriptor's other concepts, in export order.
    pub relations: Vec<ConceptRelation>,
}
