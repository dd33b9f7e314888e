//! Compressed export reading.
//!
//! Descriptor exports are distributed as gzip-compressed XML; this module
//! decompresses one into memory for tree parsing.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::types::{ConvertError, ConvertResult};

/// Reads a gzip-compressed XML export into a string.
///
/// # Errors
///
/// Returns [`ConvertError::FileNotFound`] if `path` does not exist and
/// [`ConvertError::Read`] if the file cannot be read or is not a valid
/// gzip stream; both name the input file.
pub fn read_gzip_xml<P: AsRef<Path>>(path: P) -> ConvertResult<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConvertError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let read_err = |source| ConvertError::Read {
        path: path.display().to_string(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    let mut decoder = GzDecoder::new(BufReader::new(file));
    let mut xml = String::new();
    decoder.read_to_string(&mut xml).map_err(read_err)?;
    Ok(xml)
}
