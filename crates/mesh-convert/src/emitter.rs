//! Streaming NDJSON emission.
//!
//! Walks the top-level records of a parsed export and serializes each one
//! as a single compact JSON line. Only one record's JSON is in flight at a
//! time, so output size never affects memory use.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use mesh_types::DescriptorRecord;
use roxmltree::Node;

use crate::parser::XmlRecord;
use crate::reader::read_gzip_xml;
use crate::types::{ConvertError, ConvertResult, ConvertStats};

/// Serializes every element child of `root` as one compact JSON document.
///
/// Records are separated by a single newline: no newline before the first
/// record and none after the last. A root with no element children writes
/// nothing. Returns the number of records written.
pub fn emit_records<W: Write>(root: Node<'_, '_>, writer: &mut W) -> ConvertResult<usize> {
    let mut records = 0;

    for node in root.children().filter(|node| node.is_element()) {
        let record = DescriptorRecord::from_node(node)?;
        if records > 0 {
            writer.write_all(b"\n")?;
        }
        serde_json::to_writer(&mut *writer, &record)?;
        records += 1;
    }

    Ok(records)
}

/// Converts a gzip-compressed descriptor XML export into a
/// newline-delimited JSON file.
///
/// The output file is created once the input has parsed and is flushed on
/// every exit path; a file left behind by a failed run is not valid
/// output.
///
/// # Errors
///
/// Input errors ([`ConvertError::FileNotFound`], [`ConvertError::Read`],
/// [`ConvertError::Parse`]) name the input file. Data-integrity violations
/// abort the run with the mapper's error.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> ConvertResult<ConvertStats> {
    let started = Instant::now();
    let input = input.as_ref();

    let xml = read_gzip_xml(input)?;
    let document = roxmltree::Document::parse(&xml).map_err(|source| ConvertError::Parse {
        path: input.display().to_string(),
        source,
    })?;

    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);

    match emit_records(document.root_element(), &mut writer) {
        Ok(records) => {
            writer.flush()?;
            Ok(ConvertStats {
                records,
                elapsed_ms: started.elapsed().as_millis() as u64,
            })
        }
        Err(err) => {
            // flush the error path too; the partial file is not valid output
            let _ = writer.flush();
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;

    fn record(id: &str, class: u8) -> String {
        format!(
            "<DescriptorRecord DescriptorClass=\"{class}\">\
             <DescriptorUI>{id}</DescriptorUI>\
             <DescriptorName><String>Heading {id}</String></DescriptorName>\
             <ConceptList/>\
             </DescriptorRecord>"
        )
    }

    #[test]
    fn test_three_records_two_separators() {
        let xml = format!(
            "<DescriptorRecordSet>{}{}{}</DescriptorRecordSet>",
            record("D000001", 1),
            record("D000002", 1),
            record("D000003", 3),
        );
        let document = roxmltree::Document::parse(&xml).unwrap();

        let mut out = Vec::new();
        let records = emit_records(document.root_element(), &mut out).unwrap();
        assert_eq!(records, 3);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches('\n').count(), 2);
        assert!(!text.starts_with('\n'));
        assert!(!text.ends_with('\n'));

        for line in text.lines() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.get("id").is_some());
        }
    }

    #[test]
    fn test_empty_root_writes_nothing() {
        let document =
            roxmltree::Document::parse("<DescriptorRecordSet></DescriptorRecordSet>").unwrap();

        let mut out = Vec::new();
        let records = emit_records(document.root_element(), &mut out).unwrap();
        assert_eq!(records, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_emitted_line_roundtrips() {
        let xml = format!("<DescriptorRecordSet>{}</DescriptorRecordSet>", record("D000001", 1));
        let document = roxmltree::Document::parse(&xml).unwrap();

        let mut out = Vec::new();
        emit_records(document.root_element(), &mut out).unwrap();

        let parsed: DescriptorRecord =
            serde_json::from_str(&String::from_utf8(out).unwrap()).unwrap();
        assert_eq!(parsed.id, "D000001");
        assert_eq!(parsed.name, "Heading D000001");
        assert_eq!(parsed.class, 1);
    }

    #[test]
    fn test_mapper_error_aborts_emission() {
        let xml = format!(
            "<DescriptorRecordSet>{}<DescriptorRecord DescriptorClass=\"x\"/></DescriptorRecordSet>",
            record("D000001", 1),
        );
        let document = roxmltree::Document::parse(&xml).unwrap();

        let mut out = Vec::new();
        let err = emit_records(document.root_element(), &mut out).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidClass { .. }));
    }

    #[test]
    fn test_convert_file_end_to_end() {
        let dir = std::env::temp_dir();
        let input = dir.join("mesh-convert-emitter-test.xml.gz");
        let output = dir.join("mesh-convert-emitter-test.json");

        let xml = format!(
            "<DescriptorRecordSet>{}{}</DescriptorRecordSet>",
            record("D000001", 1),
            record("D000002", 2),
        );
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(xml.as_bytes()).unwrap();
        std::fs::write(&input, encoder.finish().unwrap()).unwrap();

        let stats = convert_file(&input, &output).unwrap();
        assert_eq!(stats.records, 2);

        let text = std::fs::read_to_string(&output).unwrap();
        let ids: Vec<String> = text
            .lines()
            .map(|line| {
                let value: serde_json::Value = serde_json::from_str(line).unwrap();
                value["id"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(ids, ["D000001", "D000002"]);

        std::fs::remove_file(&input).ok();
        std::fs::remove_file(&output).ok();
    }

    #[test]
    fn test_convert_file_empty_root_creates_empty_file() {
        let dir = std::env::temp_dir();
        let input = dir.join("mesh-convert-emitter-empty.xml.gz");
        let output = dir.join("mesh-convert-emitter-empty.json");

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(b"<DescriptorRecordSet></DescriptorRecordSet>")
            .unwrap();
        std::fs::write(&input, encoder.finish().unwrap()).unwrap();

        let stats = convert_file(&input, &output).unwrap();
        assert_eq!(stats.records, 0);
        assert_eq!(std::fs::metadata(&output).unwrap().len(), 0);

        std::fs::remove_file(&input).ok();
        std::fs::remove_file(&output).ok();
    }
}
