//! Descriptor record mapping.
//!
//! Maps one `DescriptorRecord` element, delegating to the qualifier and
//! concept mappers.

use mesh_types::DescriptorRecord;
use roxmltree::Node;

use crate::parser::{map_list, read, XmlRecord};
use crate::types::{ConvertError, ConvertResult};

impl XmlRecord for DescriptorRecord {
    const TAG: &'static str = "DescriptorRecord";

    fn from_node(node: Node<'_, '_>) -> ConvertResult<Self> {
        let id = read::child_text(node, "DescriptorUI").to_string();
        let class = read::attribute(node, "DescriptorClass");
        let class = class
            .parse::<i32>()
            .map_err(|_| ConvertError::InvalidClass {
                descriptor: id.clone(),
                value: class.to_string(),
            })?;

        Ok(DescriptorRecord {
            name: read::nested_text(node, "DescriptorName", "String").to_string(),
            qualifiers: map_list(node, "AllowableQualifiersList")?,
            concepts: map_list(node, "ConceptList")?,
            id,
            class,
        })
    }
}
