//! Naive CSV line codec
//!
//! One record per line, fields `name,surname,email,phone`, separated by a
//! bare comma. There is no quoting or escaping: a comma inside a value splits
//! it, so `encode_line` followed by `parse_line` is only an identity for
//! values free of commas and newlines.

use crate::error::{AddrBookError, Result};
use crate::record::{Field, Record};

const SEPARATOR: char = ',';

/// How strictly lines are checked when decoding
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Missing trailing fields become empty, extra fields are ignored
    #[default]
    Lenient,
    /// Exactly four fields are required
    Strict,
}

/// Decode a single line into a record
///
/// Missing trailing tokens map to empty strings and tokens past the fourth
/// are dropped. A line without commas is taken as a name only. Only an empty
/// line is rejected.
pub fn parse_line(line: &str) -> Result<Record> {
    if line.is_empty() {
        return Err(AddrBookError::malformed("empty line"));
    }

    let mut tokens = line.split(SEPARATOR);
    let mut next = || tokens.next().unwrap_or("");
    let name = next();
    let surname = next();
    let email = next();
    let phone = next();

    Ok(Record::new(name, surname, email, phone))
}

/// Decode a line that must contain exactly four fields
pub fn parse_line_strict(line: &str) -> Result<Record> {
    let count = line.split(SEPARATOR).count();
    if line.is_empty() || count != Field::ALL.len() {
        return Err(AddrBookError::malformed(format!(
            "expected {} fields, found {}",
            Field::ALL.len(),
            if line.is_empty() { 0 } else { count }
        )));
    }
    parse_line(line)
}

/// Decode a line according to `mode`
pub fn parse_line_with(line: &str, mode: ParseMode) -> Result<Record> {
    match mode {
        ParseMode::Lenient => parse_line(line),
        ParseMode::Strict => parse_line_strict(line),
    }
}

/// Render a record as `name,surname,email,phone` with no terminator
pub fn encode_line(record: &Record) -> String {
    let mut line = String::with_capacity(
        record.values().map(str::len).sum::<usize>() + Field::ALL.len() - 1,
    );
    for (i, value) in record.values().enumerate() {
        if i > 0 {
            line.push(SEPARATOR);
        }
        line.push_str(value);
    }
    line
}
