use std::fs;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::errors::{OrgChartError, Result};
use crate::types::Record;

/// Records read from a roster file together with a fingerprint of its bytes.
#[derive(Debug, Clone)]
pub struct Roster {
    pub records: Vec<Record>,
    /// SHA-256 of the raw file contents, hex encoded.
    pub fingerprint: String,
}

/// Compute SHA-256 hash of roster source bytes.
pub fn roster_fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Parses CSV text with a header row into records.
///
/// Blank lines are skipped. A row with a different number of fields than the
/// header, or any invalid UTF-8, fails the whole parse: no partial roster is
/// ever returned. `source` names the input in error messages.
pub fn parse_roster<R: Read>(reader: R, source: &str) -> Result<Vec<Record>> {
    let csv_error = |e: csv::Error| OrgChartError::Csv {
        message: e.to_string(),
        path: source.to_string(),
    };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers = rdr.headers().map_err(csv_error)?.clone();
    tracing::debug!(source, headers = ?headers, "parsed roster headers");

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row.map_err(csv_error)?;
        records.push(Record::from_pairs(headers.iter().zip(row.iter())));
    }

    tracing::debug!(source, rows = records.len(), "parsed roster rows");
    Ok(records)
}

/// Reads and parses the roster file at `path`.
pub fn read_roster(path: &Path) -> Result<Roster> {
    let bytes = fs::read(path).map_err(|e| OrgChartError::Csv {
        message: format!("failed to read roster: {}", e),
        path: path.display().to_string(),
    })?;

    let records = parse_roster(bytes.as_slice(), &path.display().to_string())?;
    Ok(Roster {
        records,
        fingerprint: roster_fingerprint(&bytes),
    })
}
