//! Cosmic expansion: galaxy pair distances once empty rows and columns grow.

use std::io::BufRead;

use tracing::debug;

use crate::error::{ParseError, Result, ToolError};
use crate::io::lines;
use crate::model::ExpansionTotals;

/// Growth factor for the first answer: every empty row or column doubles.
pub const DOUBLED: u64 = 2;

/// Default growth factor for the second answer.
pub const DEFAULT_EXPANSION: u64 = 1_000_000;

/// Galaxy coordinates as (row, column).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub galaxies: Vec<(u64, u64)>,
}

impl Image {
    pub fn parse(lines: &[String]) -> Result<Self> {
        let mut galaxies = Vec::new();
        let rows = lines.iter().enumerate().filter(|(_, line)| !line.trim().is_empty());
        for (row, (index, line)) in rows.enumerate() {
            for (column, symbol) in line.trim_end().chars().enumerate() {
                match symbol {
                    '#' => galaxies.push((row as u64, column as u64)),
                    '.' => {}
                    other => return Err(ParseError::UnknownSymbol(other).at_line(index + 1, line)),
                }
            }
        }
        Ok(Self { galaxies })
    }

    /// Sum of Manhattan distances over every galaxy pair, with each empty row
    /// and column counted `factor` times.
    pub fn distance_sum(&self, factor: u64) -> Result<u64> {
        if factor == 0 {
            return Err(ToolError::InvalidInput(
                "expansion factor must be positive".to_string(),
            ));
        }
        let overflow = || ToolError::Overflow(format!("distances at expansion {factor}"));
        let rows = expand(self.galaxies.iter().map(|&(row, _)| row), factor).ok_or_else(overflow)?;
        let columns =
            expand(self.galaxies.iter().map(|&(_, column)| column), factor).ok_or_else(overflow)?;
        let rows = axis_distance_sum(rows).ok_or_else(overflow)?;
        let columns = axis_distance_sum(columns).ok_or_else(overflow)?;
        rows.checked_add(columns).ok_or_else(overflow)
    }
}

/// Shifts each coordinate by the empty lines before it, growing each of them
/// to `factor` lines.
fn expand(coordinates: impl Iterator<Item = u64>, factor: u64) -> Option<Vec<u64>> {
    let mut sorted: Vec<u64> = coordinates.collect();
    sorted.sort_unstable();
    let growth = factor.checked_sub(1)?;
    let mut expanded = Vec::with_capacity(sorted.len());
    let mut empty = 0u64;
    let mut previous: Option<u64> = None;
    for coordinate in sorted {
        if let Some(previous) = previous {
            empty += coordinate.saturating_sub(previous + 1);
        } else {
            empty += coordinate;
        }
        previous = Some(coordinate);
        expanded.push(coordinate.checked_add(empty.checked_mul(growth)?)?);
    }
    Some(expanded)
}

/// Sum of pairwise gaps along one sorted axis. The `i`th of `n` values is
/// added `i` times and subtracted `n - 1 - i` times.
fn axis_distance_sum(sorted: Vec<u64>) -> Option<u64> {
    let mut prefix = 0u64;
    let mut total = 0u64;
    for (count, value) in (0u64..).zip(sorted) {
        let gap = value.checked_mul(count)?.checked_sub(prefix)?;
        total = total.checked_add(gap)?;
        prefix = prefix.checked_add(value)?;
    }
    Some(total)
}

pub fn solve<R: BufRead>(reader: R, factor: u64) -> Result<ExpansionTotals> {
    let image = Image::parse(&lines::collect(reader)?)?;
    debug!(galaxies = image.galaxies.len(), factor, "image parsed");
    Ok(ExpansionTotals {
        distance_sum: image.distance_sum(DOUBLED)?,
        expanded_distance_sum: image.distance_sum(factor)?,
    })
}
