//! # mesh-convert
//!
//! Streaming converter from MeSH descriptor XML exports to
//! newline-delimited JSON.
//!
//! The descriptor export is a gzip-compressed XML document whose root
//! holds one `DescriptorRecord` element per descriptor. [`convert_file`]
//! decompresses and parses the document, maps every record to the
//! [`mesh_types`] document shape, and writes one compact JSON object per
//! line, in export order.
//!
//! Data-integrity violations in the export (an unknown relation code, a
//! relation that does not involve the concept it was found under, a
//! non-numeric descriptor class) abort the whole run with a
//! [`ConvertError`]; absent optional data (term, qualifier, and relation
//! lists, scope notes, CAS names) never does.

#![warn(missing_docs)]

mod concept;
mod descriptor;
mod emitter;
mod parser;
mod qualifier;
mod reader;
mod relation;
mod term;
mod types;

pub use emitter::{convert_file, emit_records};
pub use parser::{map_list, read, XmlRecord};
pub use reader::read_gzip_xml;
pub use relation::map_relations;
pub use types::{ConvertError, ConvertResult, ConvertStats};

// Re-export mesh-types for convenience
pub use mesh_types;
