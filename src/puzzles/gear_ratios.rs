//! Engine schematic: numbers next to symbols are part numbers, and a `*`
//! touching exactly two part numbers is a gear.

use std::collections::HashMap;
use std::io::BufRead;

use tracing::debug;

use crate::error::{Result, ToolError, parse_number};
use crate::io::lines;
use crate::model::GearTotals;

/// A run of digits in the schematic. `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineNumber {
    pub row: usize,
    pub start: usize,
    pub end: usize,
    pub value: u64,
}

/// A schematic grid. Every byte that is neither a digit nor `.` is a symbol.
#[derive(Debug, Clone)]
pub struct Schematic {
    rows: Vec<Vec<u8>>,
}

impl Schematic {
    pub fn new(rows: impl IntoIterator<Item = String>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .filter(|row| !row.is_empty())
                .map(String::into_bytes)
                .collect(),
        }
    }

    /// All digit runs, row by row, left to right.
    pub fn numbers(&self) -> Result<Vec<EngineNumber>> {
        let mut numbers = Vec::new();
        for (row, cells) in self.rows.iter().enumerate() {
            let mut col = 0;
            while col < cells.len() {
                if !cells[col].is_ascii_digit() {
                    col += 1;
                    continue;
                }
                let start = col;
                while col < cells.len() && cells[col].is_ascii_digit() {
                    col += 1;
                }
                let digits = String::from_utf8_lossy(&cells[start..col]);
                let value = parse_number(&digits).map_err(|error| {
                    error.at_line(row + 1, &String::from_utf8_lossy(cells))
                })?;
                numbers.push(EngineNumber {
                    row,
                    start,
                    end: col,
                    value,
                });
            }
        }
        Ok(numbers)
    }

    fn symbol_at(&self, row: usize, col: usize) -> Option<u8> {
        let cell = *self.rows.get(row)?.get(col)?;
        (!cell.is_ascii_digit() && cell != b'.').then_some(cell)
    }

    /// Positions and symbols of every cell touching `number`, diagonals included.
    pub fn adjacent_symbols(&self, number: &EngineNumber) -> Vec<((usize, usize), u8)> {
        let rows = number.row.saturating_sub(1)..=number.row + 1;
        let mut symbols = Vec::new();
        for row in rows {
            for col in number.start.saturating_sub(1)..=number.end {
                if let Some(symbol) = self.symbol_at(row, col) {
                    symbols.push(((row, col), symbol));
                }
            }
        }
        symbols
    }
}

/// Sums part numbers and gear ratios. A number touching several `*` symbols
/// counts towards each of them.
pub fn solve<R: BufRead>(reader: R) -> Result<GearTotals> {
    let schematic = Schematic::new(lines::collect(reader)?);
    let mut totals = GearTotals::default();
    let mut stars: HashMap<(usize, usize), Vec<u64>> = HashMap::new();

    for number in schematic.numbers()? {
        let symbols = schematic.adjacent_symbols(&number);
        if symbols.is_empty() {
            continue;
        }
        totals.part_number_sum = totals
            .part_number_sum
            .checked_add(number.value)
            .ok_or_else(|| ToolError::Overflow("part number sum".to_string()))?;
        for (position, symbol) in symbols {
            if symbol == b'*' {
                stars.entry(position).or_default().push(number.value);
            }
        }
    }

    for (position, parts) in &stars {
        let [first, second] = parts.as_slice() else {
            debug!(?position, parts = parts.len(), "star is not a gear");
            continue;
        };
        totals.gear_ratio_sum = first
            .checked_mul(*second)
            .and_then(|ratio| totals.gear_ratio_sum.checked_add(ratio))
            .ok_or_else(|| ToolError::Overflow("gear ratio sum".to_string()))?;
    }
    Ok(totals)
}
