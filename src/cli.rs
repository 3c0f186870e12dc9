use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "addrbook", about = "Manage an address book stored as CSV")]
pub struct Args {
    /// Address book file (default: ~/addresses.csv)
    #[arg(short = 'f', long, value_name = "FILE", env = "ADDRBOOK_FILE")]
    pub file: Option<PathBuf>,

    /// Print the address book and exit without saving
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Reject lines that do not have exactly four fields
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn parse_mode(&self) -> crate::codec::ParseMode {
        if self.strict {
            crate::codec::ParseMode::Strict
        } else {
            crate::codec::ParseMode::Lenient
        }
    }
}
