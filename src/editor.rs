use std::borrow::Cow::{self, Borrowed, Owned};

use log::warn;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Editor, Helper, Hinter, Validator};

use crate::common::{LedgerError, LedgerResult};
use crate::input::LineReader;

/// Readline history, kept in the working directory
pub(crate) static COMMAND_HISTORY_FILE: &str = ".finledger_history";

pub(crate) type LedgerEditor = Editor<LedgerHelper, DefaultHistory>;

#[derive(Helper, Completer, Hinter, Validator)]
pub(crate) struct LedgerHelper {
    #[rustyline(Hinter)]
    pub(crate) hinter: HistoryHinter,
    pub(crate) colored_prompt: String,
}

impl Highlighter for LedgerHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Owned(format!("{}{}\x1b[0m", self.colored_prompt, prompt))
        } else {
            Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned("\x1b[2m".to_owned() + hint + "\x1b[m")
    }
}

/// Build the line editor and load previous history
pub(crate) fn new_editor() -> LedgerResult<LedgerEditor> {
    let mut rl: LedgerEditor = Editor::new().map_err(readline_error)?;
    rl.set_helper(Some(LedgerHelper {
        hinter: HistoryHinter::new(),
        colored_prompt: "\x1b[1;32m".to_owned(),
    }));
    if rl.load_history(COMMAND_HISTORY_FILE).is_err() {
        println!("No previous history.");
    }
    Ok(rl)
}

pub(crate) fn save_history(rl: &mut LedgerEditor) {
    if let Err(err) = rl.save_history(COMMAND_HISTORY_FILE) {
        warn!("Unable to save history: {}", err);
    }
}

impl LineReader for LedgerEditor {
    fn read_line(&mut self, prompt: &str) -> LedgerResult<String> {
        match self.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(err) = self.add_history_entry(line.as_str()) {
                        warn!("Unable to add history entry: {}", err);
                    }
                }
                Ok(line)
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                Err(LedgerError::Aborted)
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                Err(LedgerError::Aborted)
            },
            Err(err) => Err(readline_error(err)),
        }
    }
}

fn readline_error(err: ReadlineError) -> LedgerError {
    match err {
        ReadlineError::Io(e) => LedgerError::Io(e),
        other => LedgerError::Io(std::io::Error::new(std::io::ErrorKind::Other, other.to_string())),
    }
}
