//! Reader for the whitespace-delimited equatorial coordinate catalog.
//!
//! One cluster per line, seven numeric fields in this order:
//!
//! ```text
//! ra_hour ra_min dec_deg dec_min glat glon distance
//! ```
//!
//! Reading stops at the first blank line or at end of input. Any line with
//! the wrong number of fields or a non-numeric field aborts the load; there
//! is no partial result.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::cluster::{ClusterRecord, FIELD_COUNT, FIELD_NAMES};
use crate::errors::{GlobularError, GlobularResult};

/// Catalog path used when none is given.
pub const DEFAULT_CATALOG_PATH: &str = "./equatorial_coordinates.txt";

/// Parses a single catalog line.
///
/// Errors carry line number 0; [`parse_catalog`] fills in the real one.
pub fn parse_line(line: &str) -> GlobularResult<ClusterRecord> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != FIELD_COUNT {
        return Err(GlobularError::parse(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            tokens.len()
        )));
    }

    let mut fields = [0.0f64; FIELD_COUNT];
    for (i, token) in tokens.iter().enumerate() {
        fields[i] = f64::from_str(token).map_err(|_| {
            GlobularError::parse(format!("invalid {}: '{}'", FIELD_NAMES[i], token))
        })?;
    }

    Ok(ClusterRecord::from_fields(fields))
}

/// Parses catalog text up to the first blank line.
pub fn parse_catalog(content: &str) -> GlobularResult<Vec<ClusterRecord>> {
    let mut clusters = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            break;
        }
        let record = parse_line(line).map_err(|e| e.at_line(line_num + 1))?;
        clusters.push(record);
    }

    Ok(clusters)
}

/// Reads and parses a catalog file.
///
/// # Errors
/// [`GlobularError::Io`] if the file cannot be read,
/// [`GlobularError::Parse`] for the first malformed line.
pub fn load_catalog(path: impl AsRef<Path>) -> GlobularResult<Vec<ClusterRecord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| GlobularError::io(path, e))?;
    let clusters = parse_catalog(&content)?;
    debug!(path = %path.display(), count = clusters.len(), "loaded cluster catalog");
    Ok(clusters)
}
