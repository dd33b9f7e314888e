//! Generic XML record mapping.
//!
//! Provides the trait implemented by every record mapper, a generic
//! list-element mapper, and the node accessors shared across mappers.

use roxmltree::Node;

use crate::types::ConvertResult;

/// Trait for types that can be mapped from an XML element.
///
/// Implemented for each record shape of the descriptor export.
pub trait XmlRecord: Sized {
    /// Element name of one record inside its list element.
    const TAG: &'static str;

    /// Maps a single XML element to a record.
    fn from_node(node: Node<'_, '_>) -> ConvertResult<Self>;
}

/// Maps the entries of a named list element in document order.
///
/// `parent` is the element that may contain the list. An absent list, or a
/// list without matching children, yields an empty vector.
pub fn map_list<T: XmlRecord>(parent: Node<'_, '_>, list_tag: &str) -> ConvertResult<Vec<T>> {
    match read::child(parent, list_tag) {
        Some(list) => list
            .children()
            .filter(|entry| entry.has_tag_name(T::TAG))
            .map(T::from_node)
            .collect(),
        None => Ok(Vec::new()),
    }
}

/// Accessors over parsed XML nodes.
///
/// Missing elements, attributes, and text all read as the empty string,
/// matching the export convention that optional values are simply absent.
pub mod read {
    use roxmltree::Node;

    /// Returns the first child element with the given name.
    pub fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
        node.children().find(|child| child.has_tag_name(name))
    }

    /// Returns the text of the named child element, or `""`.
    pub fn child_text<'a>(node: Node<'a, '_>, name: &str) -> &'a str {
        child(node, name).and_then(|c| c.text()).unwrap_or("")
    }

    /// Returns the text of a nested `outer`/`inner` element pair, or `""`.
    pub fn nested_text<'a>(node: Node<'a, '_>, outer: &str, inner: &str) -> &'a str {
        child(node, outer)
            .map(|c| child_text(c, inner))
            .unwrap_or("")
    }

    /// Returns the named attribute value, or `""`.
    pub fn attribute<'a>(node: Node<'a, '_>, name: &str) -> &'a str {
        node.attribute(name).unwrap_or("")
    }
}
