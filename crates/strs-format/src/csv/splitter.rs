//! Line tokenizer for comma-separated values
//!
//! A single line is walked by an explicit state machine. Quotes only have
//! meaning as the first character of an entry; inside a quoted entry a
//! doubled quote stands for one literal quote.

use crate::error::{Result, StrsError};
use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    PreEntry,
    InEntry,
    InQuotedEntry,
    InQuotedEntryAtQuote,
    PostEntry,
    Done,
}

enum Step {
    Continue,
    Yield(Result<String>),
    Stop,
}

/// Lazy iterator over the entries of one CSV line
///
/// Created by [`split`]. After a format error the error is yielded once and
/// the iterator ends.
#[derive(Debug, Clone)]
pub struct CsvSplitter<'a> {
    chars: Peekable<Chars<'a>>,
    state: State,
    entry: String,
    consumed: usize,
}

impl<'a> CsvSplitter<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            chars: line.chars().peekable(),
            state: State::Start,
            entry: String::new(),
            consumed: 0,
        }
    }

    fn column(&self) -> usize {
        self.consumed + 1
    }

    fn bump(&mut self) {
        self.chars.next();
        self.consumed += 1;
    }

    fn accept(&mut self, c: char) {
        self.entry.push(c);
        self.bump();
    }

    fn emit(&mut self) -> Step {
        Step::Yield(Ok(std::mem::take(&mut self.entry)))
    }

    fn fail(&mut self, error: StrsError) -> Step {
        self.state = State::Done;
        Step::Yield(Err(error))
    }

    fn step(&mut self) -> Step {
        let next = self.chars.peek().copied();

        match (self.state, next) {
            (State::Start, None) | (State::Done, _) => {
                self.state = State::Done;
                Step::Stop
            }
            (State::Start, Some(_)) => {
                self.state = State::PreEntry;
                Step::Continue
            }

            (State::PreEntry | State::InEntry | State::InQuotedEntryAtQuote, None) => {
                self.state = State::Done;
                self.emit()
            }
            (State::PreEntry, Some('"')) => {
                self.bump();
                self.state = State::InQuotedEntry;
                Step::Continue
            }
            (State::PreEntry | State::InEntry | State::InQuotedEntryAtQuote, Some(',')) => {
                self.state = State::PostEntry;
                Step::Continue
            }
            (State::PreEntry | State::InEntry, Some(c)) => {
                self.accept(c);
                self.state = State::InEntry;
                Step::Continue
            }

            (State::InQuotedEntry, None) => self.fail(StrsError::UnterminatedQuote {
                column: self.column(),
            }),
            (State::InQuotedEntry, Some('"')) => {
                self.bump();
                self.state = State::InQuotedEntryAtQuote;
                Step::Continue
            }
            (State::InQuotedEntry, Some(c)) => {
                self.accept(c);
                Step::Continue
            }

            (State::InQuotedEntryAtQuote, Some('"')) => {
                self.accept('"');
                self.state = State::InQuotedEntry;
                Step::Continue
            }
            (State::InQuotedEntryAtQuote, Some(found)) => {
                self.fail(StrsError::UnexpectedAfterQuote {
                    found,
                    column: self.column(),
                })
            }

            (State::PostEntry, _) => {
                self.bump();
                self.state = State::PreEntry;
                self.emit()
            }
        }
    }
}

impl Iterator for CsvSplitter<'_> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.step() {
                Step::Continue => {}
                Step::Yield(item) => return Some(item),
                Step::Stop => return None,
            }
        }
    }
}

/// Split one line (without its terminator) into entries
///
/// An empty line has no entries. A trailing comma yields a trailing empty
/// entry.
///
/// # Examples
///
/// ```
/// use strs_format::csv::split;
///
/// let fields: Vec<String> = split(r#"a,"""b""",",c,",d"#).collect::<Result<_, _>>()?;
/// assert_eq!(fields, ["a", "\"b\"", ",c,", "d"]);
///
/// assert_eq!(split("").count(), 0);
/// # Ok::<(), strs_format::StrsError>(())
/// ```
#[must_use]
pub fn split(line: &str) -> CsvSplitter<'_> {
    CsvSplitter::new(line)
}

/// Split one line and collect the entries, stopping at the first format error
pub fn split_line(line: &str) -> Result<Vec<String>> {
    split(line).collect()
}
