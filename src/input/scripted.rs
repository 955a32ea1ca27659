use std::collections::VecDeque;
use crate::common::{LedgerError, LedgerResult};
use crate::input::LineReader;

/// Replays canned answers and records the prompts it was shown
pub(crate) struct ScriptedReader {
    lines: VecDeque<String>,
    pub(crate) prompts: Vec<String>,
}

impl ScriptedReader {
    pub(crate) fn new(lines: &[&str]) -> ScriptedReader {
        ScriptedReader {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            prompts: vec![],
        }
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.lines.is_empty()
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self, prompt: &str) -> LedgerResult<String> {
        self.prompts.push(prompt.to_string());
        self.lines.pop_front().ok_or(LedgerError::Aborted)
    }
}
