//! Allowable qualifier list mapping.
//!
//! Maps `AllowableQualifiersList`/`AllowableQualifier` elements. The
//! qualifier's identity lives on the nested `QualifierReferredTo` element,
//! not on the entry itself.

use mesh_types::Qualifier;
use roxmltree::Node;

use crate::parser::{read, XmlRecord};
use crate::types::ConvertResult;

impl XmlRecord for Qualifier {
    const TAG: &'static str = "AllowableQualifier";

    fn from_node(node: Node<'_, '_>) -> ConvertResult<Self> {
        match read::child(node, "QualifierReferredTo") {
            Some(referred) => Ok(Qualifier {
                id: read::child_text(referred, "QualifierUI").to_string(),
                name: read::nested_text(referred, "QualifierName", "String").to_string(),
            }),
            None => Ok(Qualifier {
                id: String::new(),
                name: String::new(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::map_list;

    #[test]
    fn test_map_qualifiers_through_reference() {
        let document = roxmltree::Document::parse(
            "<DescriptorRecord><AllowableQualifiersList>\
             <AllowableQualifier><QualifierReferredTo>\
             <QualifierUI>Q000008</QualifierUI>\
             <QualifierName><String>administration &amp; dosage</String></QualifierName>\
             </QualifierReferredTo></AllowableQualifier>\
             <AllowableQualifier><QualifierReferredTo>\
             <QualifierUI>Q000009</QualifierUI>\
             <QualifierName><String>adverse effects</String></QualifierName>\
             </QualifierReferredTo></AllowableQualifier>\
             </AllowableQualifiersList></DescriptorRecord>",
        )
        .unwrap();

        let qualifiers: Vec<Qualifier> =
            map_list(document.root_element(), "AllowableQualifiersList").unwrap();
        assert_eq!(qualifiers.len(), 2);
        assert_eq!(qualifiers[0].id, "Q000008");
        assert_eq!(qualifiers[0].name, "administration & dosage");
        assert_eq!(qualifiers[1].id, "Q000009");
    }

    #[test]
    fn test_absent_qualifier_list_is_empty() {
        let document = roxmltree::Document::parse("<DescriptorRecord/>").unwrap();
        let qualifiers: Vec<Qualifier> =
            map_list(document.root_element(), "AllowableQualifiersList").unwrap();
        assert!(qualifiers.is_empty());
    }
}
