use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddrBookError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("position {pos} is out of range for {len} records")]
    PositionOutOfRange { pos: usize, len: usize },

    #[error("malformed record{}: {reason}", line_suffix(.line))]
    MalformedRecord { line: Option<usize>, reason: String },

    #[error("unknown field '{0}': expected name, surname, email or phone")]
    UnknownField(String),

    #[error("could not determine home directory; use --file")]
    NoHomeDir,
}

impl AddrBookError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        AddrBookError::MalformedRecord {
            line: None,
            reason: reason.into(),
        }
    }

    /// Attach a 1-based line number to a parse failure
    pub(crate) fn at_line(self, line_no: usize) -> Self {
        match self {
            AddrBookError::MalformedRecord { reason, .. } => AddrBookError::MalformedRecord {
                line: Some(line_no),
                reason,
            },
            other => other,
        }
    }
}

fn line_suffix(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!(" on line {}", n),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, AddrBookError>;
