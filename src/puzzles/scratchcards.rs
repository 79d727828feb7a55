use std::collections::HashSet;
use std::io::BufRead;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ParseError, Result, ToolError, parse_number};
use crate::io::lines;
use crate::model::ScratchcardTotals;

static CARD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Card\s+(\d+):([\d\s]*)\|([\d\s]*)$").expect("card pattern compiles")
});

/// One scratchcard: the winning numbers and the numbers scratched off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scratchcard {
    pub id: u32,
    pub winning: HashSet<u32>,
    pub scratched: Vec<u32>,
}

impl Scratchcard {
    /// How many scratched numbers are winning numbers.
    pub fn matches(&self) -> usize {
        self.scratched
            .iter()
            .filter(|number| self.winning.contains(*number))
            .count()
    }

    /// 1 point for the first match, doubled for each further match. `None`
    /// when the score does not fit in 64 bits.
    pub fn points(&self) -> Option<u64> {
        match self.matches() {
            0 => Some(0),
            matches => u32::try_from(matches - 1)
                .ok()
                .and_then(|shift| 1u64.checked_shl(shift)),
        }
    }
}

/// Parses `Card 1: 41 48 83 | 83 86  6`.
pub fn parse_card(line: &str) -> std::result::Result<Scratchcard, ParseError> {
    let captures = CARD_PATTERN.captures(line).ok_or_else(|| ParseError::Malformed {
        expected: "'Card <id>: <numbers> | <numbers>'",
        found: line.to_string(),
    })?;
    let numbers = |text: &str| {
        text.split_whitespace()
            .map(parse_number)
            .collect::<std::result::Result<Vec<u32>, _>>()
    };
    Ok(Scratchcard {
        id: parse_number(&captures[1])?,
        winning: numbers(&captures[2])?.into_iter().collect(),
        scratched: numbers(&captures[3])?,
    })
}

/// Scores every card, then plays out the copies: a card with `n` matches wins
/// one copy of each of the next `n` cards, for every copy of it held.
pub fn solve<R: BufRead>(reader: R) -> Result<ScratchcardTotals> {
    let mut totals = ScratchcardTotals::default();
    let mut matches = Vec::new();
    for entry in lines::numbered(reader) {
        let (number, line) = entry?;
        if line.trim().is_empty() {
            continue;
        }
        let card = parse_card(&line).map_err(|error| error.at_line(number, &line))?;
        totals.points = card
            .points()
            .and_then(|points| totals.points.checked_add(points))
            .ok_or_else(|| ToolError::Overflow(format!("points at card {}", card.id)))?;
        matches.push(card.matches());
    }

    let mut copies = vec![1u64; matches.len()];
    for (index, &won) in matches.iter().enumerate() {
        let held = copies[index];
        let last = (index + won).min(matches.len() - 1);
        for count in &mut copies[index + 1..=last] {
            *count = count
                .checked_add(held)
                .ok_or_else(|| ToolError::Overflow("scratchcard copies".to_string()))?;
        }
    }
    totals.cards = copies
        .iter()
        .try_fold(0u64, |sum, &count| sum.checked_add(count))
        .ok_or_else(|| ToolError::Overflow("scratchcard count".to_string()))?;
    Ok(totals)
}
