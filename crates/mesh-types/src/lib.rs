//! # mesh-types
//!
//! Type definitions for MeSH (Medical Subject Headings) descriptor records.
//!
//! This crate provides the document shape produced by converting a MeSH
//! descriptor XML export: descriptor records with their allowable
//! qualifiers, concepts, terms, and concept relations.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use mesh_types::{Concept, DescriptorRecord, RelationType};
//!
//! let concept = Concept {
//!     id: "M0000001".to_string(),
//!     name: "Calcimycin".to_string(),
//!     preferred: true,
//!     note: "An ionophorous, polyether antibiotic.".to_string(),
//!     casn1_name: Some("4-Benzoxazolecarboxylic acid".to_string()),
//!     terms: Vec::new(),
//!     relations: Vec::new(),
//! };
//!
//! let record = DescriptorRecord {
//!     id: "D000001".to_string(),
//!     name: "Calcimycin".to_string(),
//!     class: 1,
//!     qualifiers: Vec::new(),
//!     concepts: vec![concept],
//! };
//!
//! assert_eq!(
//!     record.preferred_concept().map(|c| c.id.as_str()),
//!     Some("M0000001")
//! );
//!
//! // Relation codes decode to a single tagged type
//! assert_eq!(RelationType::from_code("NRW"), Some(RelationType::Narrower));
//! ```
//!
//! ## Without Serde
//!
//! To use this crate without serde (zero dependencies):
//!
//! ```toml
//! [dependencies]
//! mesh-types = { version = "0.1", default-features = false }
//! ```

#![warn(missing_docs)]

mod concept;
mod descriptor;
mod qualifier;
mod relation;
mod term;
mod ui;

// Re-export all public types at crate root
pub use concept::Concept;
pub use descriptor::DescriptorRecord;
pub use qualifier::Qualifier;
pub use relation::{ConceptRelation, RelationType};
pub use term::Term;
pub use ui::MeshUi;
