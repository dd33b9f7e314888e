//! Converter-specific error and result types.

use thiserror::Error;

/// Errors that can occur while converting a descriptor export.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// I/O error writing the output file.
    #[error("IO error writing output: {0}")]
    Io(#[from] std::io::Error),

    /// Input file not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Failed to read or decompress the input file.
    #[error("Failed to read compressed XML from {path}: {source}")]
    Read {
        /// Path of the input file.
        path: String,
        /// The underlying I/O or gzip error.
        source: std::io::Error,
    },

    /// Malformed XML in the input file.
    #[error("Invalid XML in {path}: {source}")]
    Parse {
        /// Path of the input file.
        path: String,
        /// The underlying XML error.
        source: roxmltree::Error,
    },

    /// Unrecognized relation name code.
    #[error("Unknown relation type: {code} (concept {concept})")]
    UnknownRelation {
        /// The unrecognized code that was encountered.
        code: String,
        /// Identifier of the concept the relation was found under.
        concept: String,
    },

    /// A relation whose endpoints do not include the concept it was
    /// found under.
    #[error("Concept {concept} is not an endpoint of its relation ({first}, {second})")]
    ForeignRelation {
        /// Identifier of the concept the relation was found under.
        concept: String,
        /// First endpoint of the relation.
        first: String,
        /// Second endpoint of the relation.
        second: String,
    },

    /// Non-numeric descriptor class code.
    #[error("Invalid descriptor class: {value} (descriptor {descriptor})")]
    InvalidClass {
        /// Identifier of the offending descriptor.
        descriptor: String,
        /// The non-numeric class value.
        value: String,
    },

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Statistics from a completed conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertStats {
    /// Descriptor records written to the output.
    pub records: usize,
    /// Time taken to convert in milliseconds.
    pub elapsed_ms: u64,
}

impl ConvertStats {
    /// Returns the conversion throughput in records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.elapsed_ms == 0 {
            0.0
        } else {
            self.records as f64 / (self.elapsed_ms as f64 / 1000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_records_per_second() {
        let stats = ConvertStats {
            records: 500,
            elapsed_ms: 2000,
        };
        assert!((stats.records_per_second() - 250.0).abs() < 0.01);

        let empty = ConvertStats::default();
        assert_eq!(empty.records_per_second(), 0.0);
    }

    #[test]
    fn test_unknown_relation_message_cites_code() {
        let err = ConvertError::UnknownRelation {
            code: "SIB".to_string(),
            concept: "M0000001".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("SIB"));
        assert!(message.contains("M0000001"));
    }
}
