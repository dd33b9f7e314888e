//! MeSH qualifier reference type.
//!
//! This module provides the `Qualifier` struct representing an allowable
//! qualifier attached to a descriptor record.

use crate::MeshUi;

/// An allowable qualifier of a descriptor.
///
/// The identity is resolved through the export's `QualifierReferredTo`
/// indirection; qualifiers are carried in export order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Qualifier {
    /// Unique identifier of the referred-to qualifier.
    pub id: MeshUi,
    /// Name of the referred-to qualifier.
    pub name: String,
}
