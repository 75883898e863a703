//! Line-oriented prompts, generic over reader and writer so tests can script them.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::person_resolver::{Candidate, Disambiguate};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `label` without a newline and reads one line back.
    pub fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    pub fn println(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Disambiguate for Console<R, W> {
    fn choose(&mut self, name: &str, candidates: &[Candidate]) -> Option<String> {
        match self.ask_choice(name, candidates) {
            Ok(choice) => Some(choice),
            Err(err) => {
                warn!(error = %err, "no disambiguation choice read");
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    fn ask_choice(&mut self, name: &str, candidates: &[Candidate]) -> io::Result<String> {
        self.println(&format!("Which '{name}'?"))?;
        for c in candidates {
            self.println(&format!("ID: {}, Name: {}, Birth: {}", c.id, c.name, c.birth))?;
        }
        self.prompt("Intended Person ID: ")
    }
}
