//! Concept relation types.
//!
//! This module provides the `ConceptRelation` struct and the `RelationType`
//! enum classifying a link between two concepts of the same descriptor.

use crate::MeshUi;

/// Classification of a relation between two concepts.
///
/// Decoded once from the export's `RelationName` code; the three codes are
/// mutually exclusive and exhaustive for recognized input.
///
/// # Examples
///
/// ```
/// use mesh_types::RelationType;
///
/// let kind = RelationType::from_code("BRD");
/// assert_eq!(kind, Some(RelationType::Broader));
/// assert_eq!(RelationType::Broader.code(), "BRD");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RelationType {
    /// The other concept is broader than the current one.
    Broader,
    /// The other concept is narrower than the current one.
    Narrower,
    /// The concepts are related without a hierarchy direction.
    Related,
}

impl RelationType {
    /// Export code for a broader relation.
    pub const BROADER_CODE: &'static str = "BRD";
    /// Export code for a narrower relation.
    pub const NARROWER_CODE: &'static str = "NRW";
    /// Export code for an undirected related relation.
    pub const RELATED_CODE: &'static str = "REL";

    /// Creates a RelationType from its export code.
    ///
    /// Returns `None` if the code doesn't match a known relation type.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            Self::BROADER_CODE => Some(Self::Broader),
            Self::NARROWER_CODE => Some(Self::Narrower),
            Self::RELATED_CODE => Some(Self::Related),
            _ => None,
        }
    }

    /// Returns the export code for this relation type.
    pub fn code(self) -> &'static str {
        match self {
            Self::Broader => Self::BROADER_CODE,
            Self::Narrower => Self::NARROWER_CODE,
            Self::Related => Self::RELATED_CODE,
        }
    }

    /// Returns the lowercase name used in JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Broader => "broader",
            Self::Narrower => "narrower",
            Self::Related => "related",
        }
    }
}

/// A link from the current concept to another concept of the same descriptor.
///
/// Relations are stored symmetrically in the export; `other` is always the
/// far endpoint after resolving which side the current concept is on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConceptRelation {
    /// Identifier of the concept on the far end of the relation.
    pub other: MeshUi,
    /// How the far concept relates to the current one.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: RelationType,
}
