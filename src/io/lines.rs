use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, ToolError};

/// Opens a puzzle input for line-by-line reading.
///
/// A path that does not exist is reported as [`ToolError::MissingInput`] so the
/// caller can stop before any totals are produced.
pub fn open(path: &Path) -> Result<BufReader<File>> {
    if !path.exists() {
        return Err(ToolError::MissingInput(path.to_path_buf()));
    }
    Ok(BufReader::new(File::open(path)?))
}

/// Yields `(line number, line)` pairs, numbering from 1.
pub fn numbered<R: BufRead>(reader: R) -> impl Iterator<Item = Result<(usize, String)>> {
    reader
        .lines()
        .zip(1..)
        .map(|(line, number)| line.map(|line| (number, line)).map_err(ToolError::from))
}

/// Reads every line up front, for puzzles that need the whole input at once.
pub fn collect<R: BufRead>(reader: R) -> Result<Vec<String>> {
    Ok(reader.lines().collect::<std::io::Result<_>>()?)
}
