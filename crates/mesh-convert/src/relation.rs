//! Concept relation list mapping.
//!
//! Maps `ConceptRelationList`/`ConceptRelation` elements. Relations are
//! stored with both endpoint ids; the mapper resolves which endpoint is
//! the concept the list was found under and keeps the other.

use mesh_types::{ConceptRelation, RelationType};
use roxmltree::Node;

use crate::parser::read;
use crate::types::{ConvertError, ConvertResult};

/// Maps a concept's `ConceptRelationList` in document order.
///
/// `concept_id` identifies the concept the list was found under; it must be
/// one endpoint of every relation in the list. An absent list yields an
/// empty vector.
///
/// # Errors
///
/// Returns [`ConvertError::UnknownRelation`] for an unrecognized
/// `RelationName` code and [`ConvertError::ForeignRelation`] when neither
/// endpoint matches `concept_id`.
pub fn map_relations(
    concept: Node<'_, '_>,
    concept_id: &str,
) -> ConvertResult<Vec<ConceptRelation>> {
    match read::child(concept, "ConceptRelationList") {
        Some(list) => list
            .children()
            .filter(|entry| entry.has_tag_name("ConceptRelation"))
            .map(|entry| relation_from_node(entry, concept_id))
            .collect(),
        None => Ok(Vec::new()),
    }
}

fn relation_from_node(entry: Node<'_, '_>, concept_id: &str) -> ConvertResult<ConceptRelation> {
    let code = read::attribute(entry, "RelationName");
    let kind = RelationType::from_code(code).ok_or_else(|| ConvertError::UnknownRelation {
        code: code.to_string(),
        concept: concept_id.to_string(),
    })?;

    let first = read::child_text(entry, "Concept1UI");
    let second = read::child_text(entry, "Concept2UI");
    let other = if concept_id == first {
        second
    } else if concept_id == second {
        first
    } else {
        return Err(ConvertError::ForeignRelation {
            concept: concept_id.to_string(),
            first: first.to_string(),
            second: second.to_string(),
        });
    };

    Ok(ConceptRelation {
        other: other.to_string(),
        kind,
    })
}
