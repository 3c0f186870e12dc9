use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::codec::ParseMode;
use crate::error::{AddrBookError, Result};

/// File name used inside the home directory
pub const DEFAULT_FILE_NAME: &str = "addresses.csv";

/// Runtime configuration derived from CLI arguments
#[derive(Clone, Debug)]
pub struct Config {
    pub data_file: PathBuf,
    pub parse_mode: ParseMode,
    pub list_only: bool,
    pub verbosity: u8,
}

impl Config {
    /// Build configuration from parsed CLI arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        Ok(Config {
            data_file: resolve_data_file(args.file.as_deref(), dirs::home_dir())?,
            parse_mode: args.parse_mode(),
            list_only: args.list,
            verbosity: args.verbose,
        })
    }
}

/// Pick the data file: an explicit path wins, else `<home>/addresses.csv`
pub fn resolve_data_file(explicit: Option<&Path>, home: Option<PathBuf>) -> Result<PathBuf> {
    match (explicit, home) {
        (Some(path), _) => Ok(path.to_path_buf()),
        (None, Some(home)) => Ok(home.join(DEFAULT_FILE_NAME)),
        (None, None) => Err(AddrBookError::NoHomeDir),
    }
}
