use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use bstr::ByteSlice;
use tracing::{debug, info};

use crate::codec::{parse_line_with, ParseMode};
use crate::error::{AddrBookError, Result};
use crate::store::RecordStore;

/// Reads lines from input, stripping the line terminator
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// failing the read.
pub struct LineReader<R> {
    reader: R,
    buffer: Vec<u8>,
    line: String,
    line_no: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            line: String::new(),
            line_no: 0,
        }
    }

    /// Read the next line, returning None at EOF
    pub fn read_line(&mut self) -> io::Result<Option<&str>> {
        self.buffer.clear();
        let bytes_read = self.reader.read_until(b'\n', &mut self.buffer)?;

        if bytes_read == 0 {
            return Ok(None);
        }
        self.line_no += 1;

        // Strip a single terminator, CRLF included
        if self.buffer.last() == Some(&b'\n') {
            self.buffer.pop();
            if self.buffer.last() == Some(&b'\r') {
                self.buffer.pop();
            }
        }

        self.line.clear();
        self.line.push_str(&self.buffer.to_str_lossy());
        Ok(Some(&self.line))
    }

    /// 1-based number of the line last returned
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

/// Build a store from CSV lines using lenient parsing
pub fn load<R: BufRead>(reader: R) -> Result<RecordStore> {
    load_with(reader, ParseMode::Lenient)
}

/// Build a store from CSV lines, appending in file order
///
/// Empty lines are skipped. A line that fails to parse aborts the load with
/// its line number attached.
pub fn load_with<R: BufRead>(reader: R, mode: ParseMode) -> Result<RecordStore> {
    let mut store = RecordStore::new();
    let mut lines = LineReader::new(reader);

    while let Some(line) = lines.read_line()? {
        if line.is_empty() {
            continue;
        }
        let parsed = parse_line_with(line, mode);
        let record = parsed.map_err(|e| e.at_line(lines.line_no()))?;
        store.append(record);
    }

    debug!(records = store.len(), "loaded records");
    Ok(store)
}

/// Load the data file, treating a missing file as an empty store
pub fn load_file(path: &Path, mode: ParseMode) -> Result<RecordStore> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("{} does not exist, starting with an empty address book", path.display());
            return Ok(RecordStore::new());
        }
        Err(e) => {
            return Err(AddrBookError::File {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let store = load_with(BufReader::new(file), mode).map_err(|e| match e {
        AddrBookError::Io(source) => AddrBookError::File {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    info!("loaded {} records from {}", store.len(), path.display());
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use std::io::{Cursor, Write};

    fn names(store: &RecordStore) -> Vec<&str> {
        store.iter().map(Record::name).collect()
    }

    #[test]
    fn test_read_lines_strips_terminators() {
        let mut reader = LineReader::new(Cursor::new("a\nb\r\nc"));
        assert_eq!(reader.read_line().unwrap(), Some("a"));
        assert_eq!(reader.read_line().unwrap(), Some("b"));
        assert_eq!(reader.read_line().unwrap(), Some("c"));
        assert_eq!(reader.line_no(), 3);
        assert_eq!(reader.read_line().unwrap(), None);
    }

    #[test]
    fn test_read_lines_replaces_invalid_utf8() {
        let mut reader = LineReader::new(Cursor::new(&b"Jos\xe9\n\xff\n"[..]));
        assert_eq!(reader.read_line().unwrap(), Some("Jos\u{FFFD}"));
        assert_eq!(reader.read_line().unwrap(), Some("\u{FFFD}"));
        assert_eq!(reader.read_line().unwrap(), None);
    }

    #[test]
    fn test_load_latin1_line() {
        let input = &b"Ann,Lee,ann@x.com,123\nJos\xe9,Roe,j@x.com,456\n"[..];
        let store = load(Cursor::new(input)).unwrap();
        assert_eq!(names(&store), vec!["Ann", "Jos\u{FFFD}"]);
        assert_eq!(store.get(1).unwrap().email(), "j@x.com");
    }

    #[test]
    fn test_load_file_latin1_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Jos\xe9,Roe,j@x.com,456\n").unwrap();
        let store = load_file(file.path(), ParseMode::Lenient).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().phone(), "456");
    }

    #[test]
    fn test_load_in_file_order() {
        let input = "Ann,Lee,ann@x.com,123\nBob,Roe,bob@x.com,456\n";
        let store = load(Cursor::new(input)).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(names(&store), vec!["Ann", "Bob"]);
        assert_eq!(store.get(1).unwrap().phone(), "456");
    }

    #[test]
    fn test_load_no_trailing_newline() {
        let store = load(Cursor::new("Ann,Lee,a,1\nBob,Roe,b,2")).unwrap();
        assert_eq!(names(&store), vec!["Ann", "Bob"]);
    }

    #[test]
    fn test_load_empty_stream() {
        let store = load(Cursor::new("")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_skips_empty_lines() {
        let store = load(Cursor::new("\nAnn,Lee,a,1\n\n\nBob,Roe,b,2\n\n")).unwrap();
        assert_eq!(names(&store), vec!["Ann", "Bob"]);
    }

    #[test]
    fn test_load_strict_reports_line_number() {
        let input = "Ann,Lee,a,1\n\nBob,Roe\n";
        let err = load_with(Cursor::new(input), ParseMode::Strict).unwrap_err();
        assert!(matches!(
            err,
            AddrBookError::MalformedRecord { line: Some(3), .. }
        ));
    }

    #[test]
    fn test_load_lenient_fills_missing_fields() {
        let store = load(Cursor::new("Bob,Roe\n")).unwrap();
        assert_eq!(store.get(0), Some(&Record::new("Bob", "Roe", "", "")));
    }

    #[test]
    fn test_load_file_missing_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = load_file(&dir.path().join("addresses.csv"), ParseMode::Lenient).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_file_reads_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Ann,Lee,ann@x.com,123").unwrap();
        let store = load_file(file.path(), ParseMode::Lenient).unwrap();
        assert_eq!(names(&store), vec!["Ann"]);
    }

    #[test]
    fn test_load_file_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_file(dir.path(), ParseMode::Lenient);
        assert!(matches!(result, Err(AddrBookError::File { .. })));
    }
}
