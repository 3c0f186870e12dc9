use std::io::{self, Write};

use crate::record::Record;
use crate::store::RecordStore;

/// Write the column header row
pub fn write_header<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "{:<15}\t{:<15}\t{:<30}\t{:<12}",
        "NAME", "SURNAME", "EMAIL", "PHONE"
    )
}

/// Write one record as a padded table row
pub fn write_row<W: Write>(writer: &mut W, record: &Record) -> io::Result<()> {
    writeln!(
        writer,
        "{:<15}\t{:<15}\t{:<30}\t{:<12}",
        record.name(),
        record.surname(),
        record.email(),
        record.phone()
    )
}

/// Write a record count, header and every row
pub fn write_table<W: Write>(writer: &mut W, store: &RecordStore) -> io::Result<()> {
    writeln!(writer, "{} records in total.", store.len())?;
    write_header(writer)?;
    for record in store {
        write_row(writer, record)?;
    }
    Ok(())
}

/// Write a header followed by `records`, or `none_message` if there are none
pub fn write_matches<'a, W, I>(writer: &mut W, records: I, none_message: &str) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    let mut header_written = false;
    for record in records {
        if !header_written {
            write_header(writer)?;
            header_written = true;
        }
        write_row(writer, record)?;
    }
    if !header_written {
        writeln!(writer, "{}", none_message)?;
    }
    Ok(())
}
