use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::codec::encode_line;
use crate::error::{AddrBookError, Result};
use crate::store::RecordStore;

/// Write every record as one CSV line, in store order
///
/// No header is written; each record carries its own `\n`.
pub fn save<W: Write>(store: &RecordStore, writer: W) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    for record in store {
        writer.write_all(encode_line(record).as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Replace the data file with the current store contents
///
/// Records go to a temporary file in the same directory, which is then
/// renamed over `path`. The old file stays intact if any write fails.
pub fn save_file(path: &Path, store: &RecordStore) -> Result<()> {
    let with_path = |source: std::io::Error| AddrBookError::File {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(with_path)?;
    save(store, file.as_file_mut()).map_err(|e| match e {
        AddrBookError::Io(source) => with_path(source),
        other => other,
    })?;
    file.as_file().sync_all().map_err(with_path)?;
    file.persist(path).map_err(|e| with_path(e.error))?;
    info!("saved {} records to {}", store.len(), path.display());
    Ok(())
}
