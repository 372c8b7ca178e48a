//! Decoder for the upstream instrument dump
//!
//! The instrument catalog arrives as delimited text: one header line of
//! comma-separated field names, then one comma-separated value line per
//! instrument. The format carries no quoting or escaping, so this module
//! splits on commas directly instead of going through a quoting-aware CSV
//! parser, which would change the wire semantics.

use thiserror::Error;

use super::{Dataset, Record};

/// Errors that can occur when decoding an instrument payload
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Payload bytes are not valid UTF-8 text
    #[error("Payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Result of decoding one payload
///
/// Rows whose field count differs from the header count are still decoded
/// (names and values are zipped up to the shorter of the two), but they are
/// counted in `mismatched_rows` so truncated fetches stay observable.
#[derive(Debug)]
pub struct Decoded {
    /// The decoded dataset, in payload order
    pub dataset: Dataset,
    /// Number of data rows whose field count differed from the header count
    pub mismatched_rows: usize,
}

/// Decodes a raw instrument payload into a [`Dataset`]
///
/// An empty payload or a payload with only a header line decodes to an empty
/// dataset, not an error. Each data line is zipped against the header names up
/// to the shorter of the two lengths; excess fields on either side are dropped.
/// Trailing empty fields are preserved (`"a,,"` has three fields).
pub fn decode(payload: &[u8]) -> Result<Decoded, DecodeError> {
    let text = std::str::from_utf8(payload)?;

    let mut lines = text.lines();
    let headers: Vec<&str> = match lines.next() {
        Some(header_line) => header_line.split(',').collect(),
        None => {
            return Ok(Decoded {
                dataset: Dataset::empty(),
                mismatched_rows: 0,
            })
        }
    };

    let mut records = Vec::new();
    let mut mismatched_rows = 0;

    for line in lines {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != headers.len() {
            mismatched_rows += 1;
        }
        let record = Record::from_pairs(headers.iter().copied().zip(fields));
        records.push(record);
    }

    Ok(Decoded {
        dataset: Dataset::from_records(records),
        mismatched_rows,
    })
}

/// Encodes a dataset back into the delimited-text format
///
/// The header line is taken from the first record's field names. Values must
/// not contain the delimiter for the output to decode back to an equal
/// dataset; the upstream format has no escaping to fall back on.
pub fn encode(dataset: &Dataset) -> String {
    let Some(first) = dataset.records().first() else {
        return String::new();
    };

    let mut out = String::new();
    let headers: Vec<&str> = first.iter().map(|(name, _)| name).collect();
    out.push_str(&headers.join(","));
    out.push('\n');

    for record in dataset.iter() {
        let row: Vec<&str> = headers
            .iter()
            .map(|name| record.get(name).unwrap_or(""))
            .collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}
