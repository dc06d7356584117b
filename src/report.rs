//! Console transcript formatting.
//!
//! Each demo run prints one line per algorithm, `"<Label>: <sequence>"`.
//! The sequence is rendered either as a bracketed list (`[1, 2, 5]`) or as
//! space-separated values (`1 2 5`).

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::ParseError;

/// How a sequence is rendered in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// `[1, 2, 5]`
    #[default]
    List,
    /// `1 2 5`
    Spaced,
}

impl Format {
    pub fn render<T: Display>(self, data: &[T]) -> String {
        match self {
            Format::List => format_list(data),
            Format::Spaced => format_spaced(data),
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::List => write!(f, "list"),
            Format::Spaced => write!(f, "spaced"),
        }
    }
}

impl FromStr for Format {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" => Ok(Format::List),
            "spaced" => Ok(Format::Spaced),
            _ => Err(ParseError::UnknownFormat(s.to_string())),
        }
    }
}

pub fn format_list<T: Display>(data: &[T]) -> String {
    format!("[{}]", join(data, ", "))
}

pub fn format_spaced<T: Display>(data: &[T]) -> String {
    join(data, " ")
}

fn join<T: Display>(data: &[T], separator: &str) -> String {
    data.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Builds one transcript line, e.g. `QuickSort: [1, 2, 5, 5, 6, 9]`.
pub fn transcript_line<T: Display>(label: impl Display, data: &[T], format: Format) -> String {
    format!("{label}: {}", format.render(data))
}
