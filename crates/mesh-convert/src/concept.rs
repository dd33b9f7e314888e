//! Concept list mapping.
//!
//! Maps `ConceptList`/`Concept` elements, delegating to the term and
//! relation mappers.

use mesh_types::Concept;
use roxmltree::Node;

use crate::parser::{map_list, read, XmlRecord};
use crate::relation::map_relations;
use crate::types::ConvertResult;

impl XmlRecord for Concept {
    const TAG: &'static str = "Concept";

    fn from_node(node: Node<'_, '_>) -> ConvertResult<Self> {
        let id = read::child_text(node, "ConceptUI").to_string();
        let terms = map_list(node, "TermList")?;
        let relations = map_relations(node, &id)?;
        let casn1_name = read::child_text(node, "CASN1Name");

        Ok(Concept {
            name: read::nested_text(node, "ConceptName", "String").to_string(),
            preferred: read::attribute(node, "PreferredConceptYN") == "Y",
            // leading and internal whitespace in scope notes is meaningful;
            // only the tail is trimmed
            note: read::child_text(node, "ScopeNote").trim_end().to_string(),
            casn1_name: (!casn1_name.is_empty()).then(|| casn1_name.to_string()),
            terms,
            relations,
            id,
        })
    }
}
