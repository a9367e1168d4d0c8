use std::io::{self, BufRead};

/// What the user asked for at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Generate,
    Quit,
    Invalid(String),
}

impl Command {
    /// `y` / `n`, any case, surrounding whitespace ignored
    pub fn parse(input: &str) -> Self {
        let answer = input.trim();
        if answer.eq_ignore_ascii_case("y") {
            Command::Generate
        } else if answer.eq_ignore_ascii_case("n") {
            Command::Quit
        } else {
            Command::Invalid(answer.to_string())
        }
    }
}

/// Where the session reads answers from
pub trait CommandSource {
    /// Next raw answer, `None` once input is exhausted
    fn next_command(&mut self) -> io::Result<Option<String>>;
}

/// One answer per line from any buffered reader (stdin, or a script in tests)
pub struct LineCommands<B> {
    input: B,
}

impl<B: BufRead> LineCommands<B> {
    pub fn new(input: B) -> Self {
        Self { input }
    }
}

impl<B: BufRead> CommandSource for LineCommands<B> {
    fn next_command(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
