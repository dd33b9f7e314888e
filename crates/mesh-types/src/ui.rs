//! MeSH unique identifier (UI) type.
//!
//! This module provides a type alias for MeSH unique identifiers. UIs are
//! prefixed strings such as `D000001` (descriptors), `M0000001` (concepts),
//! `T000002` (terms), and `Q000008` (qualifiers).

/// A MeSH unique identifier (UI).
///
/// UIs are opaque prefixed strings assigned by the NLM; the converter
/// carries them through unmodified.
///
/// # Examples
///
/// ```
/// use mesh_types::MeshUi;
///
/// let descriptor_id: MeshUi = "D000001".to_string(); // Calcimycin
/// let concept_id: MeshUi = "M0000001".to_string();
/// ```
pub type MeshUi = String;
