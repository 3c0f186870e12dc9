use std::io::{self, Write};

use clap::Parser;
use tracing::info;

use addrbook::cli::Args;
use addrbook::config::Config;
use addrbook::error::Result;
use addrbook::menu::Session;
use addrbook::signal::{self, ShutdownToken};
use addrbook::{display, input, logging, output};

fn main() {
    signal::setup_sigpipe();

    if let Err(e) = run() {
        eprintln!("addrbook: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_args(&args)?;
    logging::init(config.verbosity);

    let mut store = input::load_file(&config.data_file, config.parse_mode)?;

    if config.list_only {
        let stdout = io::stdout();
        let mut stdout = stdout.lock();
        display::write_table(&mut stdout, &store)?;
        stdout.flush()?;
        return Ok(());
    }

    let shutdown = ShutdownToken::new();
    signal::install_interrupt_handler(&shutdown);

    let end = Session::new(&mut store, io::stdin().lock(), io::stdout().lock(), shutdown).run();

    // Save even when the session failed part-way
    let saved = output::save_file(&config.data_file, &store);
    let end = end?;
    saved?;
    info!(?end, "session finished");
    Ok(())
}
