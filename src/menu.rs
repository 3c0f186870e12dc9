//! Interactive numbered menu over a [`RecordStore`]
//!
//! The session reads one line at a time from any `BufRead` and writes prompts
//! to any `Write`, so it runs the same against a terminal or a test script.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::display;
use crate::error::Result;
use crate::input::LineReader;
use crate::record::{Field, Record};
use crate::signal::ShutdownToken;
use crate::store::RecordStore;

pub const MENU: &str = "Select an action by number:\n\
1) Display address book\n\
2) Add new address to the end\n\
3) Add new address to specific position\n\
4) Delete address\n\
5) Display address in specified position\n\
6) Find address by keyword\n\
7) Find address by field\n\
8) Delete all addresses\n\
9) Quit";

const EMPTY_BOOK: &str = "Address book is empty";
const NO_MATCH: &str = "No matching address found.";
const NOT_A_NUMBER: &str = "Please enter a positive number";

/// One entry of the main menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Display,
    Append,
    Insert,
    Delete,
    Show,
    KeywordSearch,
    FieldSearch,
    Clear,
    Quit,
}

impl Action {
    /// Menu entries in the order they are numbered
    pub const ALL: [Action; 9] = [
        Action::Display,
        Action::Append,
        Action::Insert,
        Action::Delete,
        Action::Show,
        Action::KeywordSearch,
        Action::FieldSearch,
        Action::Clear,
        Action::Quit,
    ];

    /// Map a 1-based menu number to its action
    pub fn from_selection(number: usize) -> Option<Action> {
        Self::ALL.get(number.checked_sub(1)?).copied()
    }
}

/// Why a session stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    EndOfInput,
    Interrupted,
}

enum Step {
    Continue,
    Stop(SessionEnd),
}

pub struct Session<'a, R, W> {
    store: &'a mut RecordStore,
    input: LineReader<R>,
    output: W,
    shutdown: ShutdownToken,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(store: &'a mut RecordStore, input: R, output: W, shutdown: ShutdownToken) -> Self {
        Self {
            store,
            input: LineReader::new(input),
            output,
            shutdown,
        }
    }

    /// Run actions until the user quits, input ends, or shutdown is requested
    pub fn run(&mut self) -> Result<SessionEnd> {
        loop {
            if self.shutdown.is_requested() {
                info!("interrupt received, ending session");
                return Ok(SessionEnd::Interrupted);
            }
            if let Step::Stop(end) = self.step()? {
                debug!(?end, "session ended");
                return Ok(end);
            }
        }
    }

    fn step(&mut self) -> Result<Step> {
        writeln!(self.output, "{}", MENU)?;
        let Some(number) = self.read_selection()? else {
            return Ok(self.stopped());
        };
        // Nothing new starts once an interrupt is pending
        if self.shutdown.is_requested() {
            return Ok(Step::Stop(SessionEnd::Interrupted));
        }
        // read_selection only returns numbers inside the menu range
        let Some(action) = Action::from_selection(number) else {
            return Ok(Step::Continue);
        };
        if action == Action::Quit {
            return Ok(Step::Stop(SessionEnd::Quit));
        }

        debug!(?action, "performing action");
        if let Step::Stop(end) = self.perform(action)? {
            return Ok(Step::Stop(end));
        }
        writeln!(self.output)?;
        Ok(Step::Continue)
    }

    fn perform(&mut self, action: Action) -> Result<Step> {
        match action {
            Action::Display => {
                display::write_table(&mut self.output, self.store)?;
            }
            Action::Append => {
                let Some(record) = self.read_record()? else {
                    return Ok(self.stopped());
                };
                self.store.append(record);
            }
            Action::Insert => {
                let Some(record) = self.read_record()? else {
                    return Ok(self.stopped());
                };
                writeln!(self.output, "Enter position where the address should be inserted.")?;
                let Some(pos) = self.read_index(0, self.store.len())? else {
                    return Ok(self.stopped());
                };
                self.store.insert(pos, record)?;
            }
            Action::Delete => {
                if self.report_empty()? {
                    return Ok(Step::Continue);
                }
                let Some(pos) = self.read_index(0, self.store.len() - 1)? else {
                    return Ok(self.stopped());
                };
                self.store.delete(pos)?;
            }
            Action::Show => {
                if self.report_empty()? {
                    return Ok(Step::Continue);
                }
                let Some(pos) = self.read_index(0, self.store.len() - 1)? else {
                    return Ok(self.stopped());
                };
                let found = self.store.get(pos);
                display::write_matches(&mut self.output, found, NO_MATCH)?;
            }
            Action::KeywordSearch => {
                if self.report_empty()? {
                    return Ok(Step::Continue);
                }
                writeln!(self.output, "Search by keyword:")?;
                let Some(keyword) = self.read_line()? else {
                    return Ok(self.stopped());
                };
                let matches = self.store.keyword_scan(&keyword);
                display::write_matches(&mut self.output, matches, NO_MATCH)?;
            }
            Action::FieldSearch => {
                if self.report_empty()? {
                    return Ok(Step::Continue);
                }
                let Some(field) = self.read_field()? else {
                    return Ok(self.stopped());
                };
                writeln!(self.output, "Value:")?;
                let Some(query) = self.read_line()? else {
                    return Ok(self.stopped());
                };
                match self.store.find_position_by(field, &query) {
                    Some(pos) => {
                        writeln!(self.output, "Found at position {}:", pos)?;
                        display::write_matches(&mut self.output, self.store.get(pos), NO_MATCH)?;
                    }
                    None => writeln!(self.output, "{}", NO_MATCH)?,
                }
            }
            Action::Clear => {
                self.store.clear();
                writeln!(self.output, "All addresses deleted.")?;
            }
            Action::Quit => return Ok(Step::Stop(SessionEnd::Quit)),
        }
        Ok(Step::Continue)
    }

    fn stopped(&self) -> Step {
        if self.shutdown.is_requested() {
            Step::Stop(SessionEnd::Interrupted)
        } else {
            Step::Stop(SessionEnd::EndOfInput)
        }
    }

    fn report_empty(&mut self) -> Result<bool> {
        if self.store.is_empty() {
            writeln!(self.output, "{}", EMPTY_BOOK)?;
            return Ok(true);
        }
        Ok(false)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        Ok(self.input.read_line()?.map(str::to_owned))
    }

    /// Read a menu number, re-prompting until it is in range
    fn read_selection(&mut self) -> Result<Option<usize>> {
        let max = Action::ALL.len();
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim().parse::<usize>() {
                Ok(n) if (1..=max).contains(&n) => return Ok(Some(n)),
                Ok(_) => writeln!(
                    self.output,
                    "Invalid choice. Enter a number between 1 and {}",
                    max
                )?,
                Err(_) => writeln!(self.output, "{}", NOT_A_NUMBER)?,
            }
            if self.shutdown.is_requested() {
                return Ok(None);
            }
        }
    }

    /// Read a position in `min..=max`, re-prompting until it is valid
    fn read_index(&mut self, min: usize, max: usize) -> Result<Option<usize>> {
        loop {
            writeln!(self.output, "Enter a number between {} and {}:", min, max)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim().parse::<usize>() {
                Ok(n) if (min..=max).contains(&n) => return Ok(Some(n)),
                Ok(_) => writeln!(self.output, "Invalid number")?,
                Err(_) => writeln!(self.output, "{}", NOT_A_NUMBER)?,
            }
            if self.shutdown.is_requested() {
                return Ok(None);
            }
        }
    }

    fn read_field(&mut self) -> Result<Option<Field>> {
        loop {
            writeln!(self.output, "Search by field (name, surname, email, phone):")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<Field>() {
                Ok(field) => return Ok(Some(field)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
            if self.shutdown.is_requested() {
                return Ok(None);
            }
        }
    }

    /// Prompt for the four attributes of a new record
    fn read_record(&mut self) -> Result<Option<Record>> {
        writeln!(self.output, "Creating an address.")?;
        let mut values = Vec::with_capacity(Field::ALL.len());
        for prompt in ["Enter name:", "Enter surname:", "Enter email:", "Enter phone number:"] {
            writeln!(self.output, "{}", prompt)?;
            let Some(value) = self.read_line()? else {
                return Ok(None);
            };
            values.push(value);
        }
        Ok(Some(Record::new(&values[0], &values[1], &values[2], &values[3])))
    }
}
