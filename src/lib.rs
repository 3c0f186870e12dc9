//! In-memory address book backed by a flat CSV file
//!
//! [`store::RecordStore`] holds [`record::Record`]s in order and supports
//! positional insert, delete and lookup plus linear search. [`input`] and
//! [`output`] move a store to and from the CSV format in [`codec`]; [`menu`]
//! drives it interactively.

pub mod cli;
pub mod codec;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod logging;
pub mod menu;
pub mod output;
pub mod record;
pub mod search;
pub mod signal;
pub mod store;

pub use codec::{encode_line, parse_line, parse_line_strict, ParseMode};
pub use error::{AddrBookError, Result};
pub use input::{load, load_file, load_with};
pub use output::{save, save_file};
pub use record::{Field, Record};
pub use store::RecordStore;
