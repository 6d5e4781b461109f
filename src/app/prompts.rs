//! Interactive prompts for missing CLI input.

use std::io::{self, BufRead, Write};

use crate::search::{DateChoice, SearchKey};

/// Asks questions on `output` and reads answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Repeats `question` until the answer is one of `choices`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error on read/write failure, or `UnexpectedEof` if the
    /// input ends before a valid answer.
    pub fn choose(&mut self, question: &str, choices: &[&str]) -> io::Result<String> {
        loop {
            let answer = self.ask(&format!("{question} [{}]", choices.join("/")))?;
            if choices.contains(&answer.as_str()) {
                return Ok(answer);
            }
            writeln!(self.output, "Error: '{answer}' is not one of {}", choices.join(", "))?;
        }
    }

    /// Asks for a non-empty line of text.
    ///
    /// # Errors
    ///
    /// Same as [`Prompter::choose`].
    pub fn text(&mut self, label: &str) -> io::Result<String> {
        loop {
            let answer = self.ask(label)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
        }
    }

    /// Today or tomorrow.
    pub fn date_choice(&mut self) -> io::Result<DateChoice> {
        let choice = self.choose("Check for (1) Today or (2) Tomorrow?", &["1", "2"])?;
        Ok(if choice == "1" {
            DateChoice::Today
        } else {
            DateChoice::Tomorrow
        })
    }

    /// A CNR or a case triple.
    pub fn search_key(&mut self) -> io::Result<SearchKey> {
        let method = self.choose("Search by (1) CNR or (2) Case Details?", &["1", "2"])?;
        if method == "1" {
            return Ok(SearchKey::Cnr(self.text("Enter CNR number")?));
        }
        Ok(SearchKey::CaseDetails {
            case_type: self.text("Enter case type")?,
            case_number: self.text("Enter case number")?,
            case_year: self.text("Enter case year")?,
        })
    }

    /// The writer, for printing the transcript after prompting.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    fn ask(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before an answer was given",
            ));
        }
        Ok(line.trim().to_string())
    }
}
