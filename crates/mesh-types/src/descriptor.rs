//! MeSH descriptor record type.
//!
//! This module provides the `DescriptorRecord` struct, the top-level entry
//! of a descriptor export. One record corresponds to one line of converted
//! output.

use crate::{Concept, MeshUi, Qualifier};

/// A MeSH descriptor record.
///
/// # Examples
///
/// ```
/// use mesh_types::{Concept, DescriptorRecord};
///
/// let record = DescriptorRecord {
///     id: "D000001".to_string(),
///     name: "Calcimycin".to_string(),
///     class: 1,
///     qualifiers: Vec::new(),
///     concepts: vec![Concept {
///         id: "M0000001".to_string(),
///         name: "Calcimycin".to_string(),
///         preferred: true,
///         note: String::new(),
///         casn1_name: None,
///         terms: Vec::new(),
///         relations: Vec::new(),
///     }],
/// };
///
/// let preferred = record.preferred_concept().unwrap();
/// assert_eq!(preferred.id, "M0000001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DescriptorRecord {
    /// Unique identifier of this descriptor.
    pub id: MeshUi,
    /// Descriptor heading.
    pub name: String,
    /// Descriptor class code (1 = topical, 2 = publication type,
    /// 3 = check tag, 4 = geographic).
    pub class: i32,
    /// Allowable qualifiers, in export order.
    pub qualifiers: Vec<Qualifier>,
    /// Concepts of this descriptor, in export order.
    pub concepts: Vec<Concept>,
}

impl DescriptorRecord {
    /// Returns the descriptor's preferred concept.
    ///
    /// Well-formed exports flag exactly one concept as preferred; that
    /// property is not checked, and the first flagged concept is returned.
    pub fn preferred_concept(&self) -> Option<&Concept> {
        self.concepts.iter().find(|concept| concept.preferred)
    }
}
