use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur while a
/// puzzle input is read, evaluated, or reported.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading the input or writing the report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when the report cannot be serialised as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised when the input path does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when a single input line cannot be evaluated. The whole run stops
    /// at the first such line.
    #[error("line {number} '{line}': {source}")]
    Line {
        number: usize,
        line: String,
        #[source]
        source: ParseError,
    },

    /// Raised when the input parses line by line but does not form a
    /// solvable puzzle as a whole.
    #[error("invalid puzzle input: {0}")]
    InvalidInput(String),

    /// Raised when a value or running total no longer fits its integer type.
    #[error("arithmetic overflow: {0}")]
    Overflow(String),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

/// Reasons an input line is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line is not shaped like `Game <id>: <draws>`.
    #[error("expected 'Game <id>: <draws>'")]
    MalformedGame,

    /// A comma-separated entry is not shaped like `<count> <color>`.
    #[error("expected '<count> <color>', found '{0}'")]
    MalformedCube(String),

    /// Game identifiers start at 1.
    #[error("game id must be positive")]
    ZeroGameId,

    /// A numeric token does not fit its integer type.
    #[error("invalid number '{value}': {source}")]
    InvalidNumber {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// The colour is not one of red, green, or blue.
    #[error("unknown cube color '{0}'")]
    UnknownColor(String),

    /// The line does not have the layout its puzzle expects.
    #[error("expected {expected}, found '{found}'")]
    Malformed {
        expected: &'static str,
        found: String,
    },

    /// A character outside the puzzle's alphabet.
    #[error("unknown symbol '{0}'")]
    UnknownSymbol(char),
}

impl ParseError {
    /// Attaches the offending line to this error.
    pub fn at_line(self, number: usize, line: &str) -> ToolError {
        ToolError::Line {
            number,
            line: line.to_string(),
            source: self,
        }
    }
}

/// Parses a decimal token, keeping the token in the error.
pub(crate) fn parse_number<T>(value: &str) -> std::result::Result<T, ParseError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    value.parse().map_err(|source| ParseError::InvalidNumber {
        value: value.to_string(),
        source,
    })
}
