//! Errors raised when turning user-supplied text into library types.
//!
//! Sorting itself never fails; these only show up at the command-line
//! boundary where algorithm and output format names are parsed.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown sorting algorithm `{0}` (expected one of: quick, bubble, merge)")]
    UnknownAlgorithm(String),
    #[error("unknown output format `{0}` (expected one of: list, spaced)")]
    UnknownFormat(String),
}
