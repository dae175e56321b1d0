//! Line-oriented input sources for the console

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Supplies one line of user input at a time
pub trait InputProvider {
    /// Next line without its line terminator, or `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads lines from standard input
#[derive(Debug, Default)]
pub struct StdinInput;

impl StdinInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputProvider for StdinInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        read_lossy_line(&mut io::stdin().lock())
    }
}

/// Read one line, replacing invalid UTF-8 instead of failing
///
/// A bad byte sequence becomes U+FFFD so the menu can reject the line
/// and keep running.
pub fn read_lossy_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

/// Replays a fixed sequence of lines
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not consumed yet
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputProvider for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
