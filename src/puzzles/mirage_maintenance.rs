//! Oasis report: extrapolate each history forwards and backwards through its
//! difference sequences.

use std::io::BufRead;

use crate::error::{ParseError, Result, ToolError, parse_number};
use crate::io::lines;
use crate::model::MirageTotals;

/// The predicted next and previous values of one history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extrapolation {
    pub next: i64,
    pub previous: i64,
}

pub fn parse_history(line: &str) -> std::result::Result<Vec<i64>, ParseError> {
    let values = line
        .split_whitespace()
        .map(parse_number)
        .collect::<std::result::Result<Vec<i64>, _>>()?;
    if values.is_empty() {
        return Err(ParseError::Malformed {
            expected: "a list of numbers",
            found: line.to_string(),
        });
    }
    Ok(values)
}

/// Extrapolates a history, or `None` on overflow.
///
/// The next value is the sum of the last element of every level. The previous
/// value alternates signs over the first elements.
pub fn extrapolate(history: &[i64]) -> Option<Extrapolation> {
    let mut level = history.to_vec();
    let mut next = 0i64;
    let mut previous = 0i64;
    let mut sign = 1i64;
    while level.iter().any(|&value| value != 0) {
        let (&first, &last) = (level.first()?, level.last()?);
        next = next.checked_add(last)?;
        previous = previous.checked_add(sign.checked_mul(first)?)?;
        sign = -sign;
        level = level
            .windows(2)
            .map(|pair| pair[1].checked_sub(pair[0]))
            .collect::<Option<Vec<_>>>()?;
    }
    Some(Extrapolation { next, previous })
}

pub fn solve<R: BufRead>(reader: R) -> Result<MirageTotals> {
    let mut totals = MirageTotals::default();
    for entry in lines::numbered(reader) {
        let (number, line) = entry?;
        if line.trim().is_empty() {
            continue;
        }
        let history = parse_history(&line).map_err(|error| error.at_line(number, &line))?;
        let overflow = || ToolError::Overflow(format!("history on line {number}"));
        let extrapolation = extrapolate(&history).ok_or_else(overflow)?;
        totals.next_value_sum = totals
            .next_value_sum
            .checked_add(extrapolation.next)
            .ok_or_else(overflow)?;
        totals.previous_value_sum = totals
            .previous_value_sum
            .checked_add(extrapolation.previous)
            .ok_or_else(overflow)?;
    }
    Ok(totals)
}
