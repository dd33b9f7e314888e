//! Term list mapping.
//!
//! Maps `TermList`/`Term` elements of a concept.

use mesh_types::Term;
use roxmltree::Node;

use crate::parser::{read, XmlRecord};
use crate::types::ConvertResult;

impl XmlRecord for Term {
    const TAG: &'static str = "Term";

    fn from_node(node: Node<'_, '_>) -> ConvertResult<Self> {
        Ok(Term {
            id: read::child_text(node, "TermUI").to_string(),
            name: read::child_text(node, "String").to_string(),
        })
    }
}
