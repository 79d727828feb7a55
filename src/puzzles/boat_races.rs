use std::io::BufRead;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ParseError, Result, ToolError, parse_number};
use crate::io::lines;
use crate::model::RaceTotals;

static TIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*Time:([\s\d]+)$").expect("time pattern compiles"));
static DISTANCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*Distance:([\s\d]+)$").expect("distance pattern compiles"));

/// A race's duration and the record distance to beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Race {
    pub time: u64,
    pub record: u64,
}

impl Race {
    fn beats_record(&self, hold: u64) -> bool {
        u128::from(hold) * u128::from(self.time - hold) > u128::from(self.record)
    }

    /// Number of whole-millisecond hold times that travel farther than the
    /// record.
    ///
    /// The winning holds are the integers strictly between the roots of
    /// `h^2 - time*h + record = 0`. The lower root is estimated with an integer
    /// square root and then nudged onto the exact boundary.
    pub fn ways_to_win(&self) -> u64 {
        let time = u128::from(self.time);
        let Some(discriminant) = (time * time).checked_sub(4 * u128::from(self.record)) else {
            return 0;
        };
        let estimate = (time - discriminant.isqrt()) / 2;
        // The estimate is at most time / 2, so it fits back into u64.
        let mut lowest = estimate as u64;
        let midpoint = self.time / 2;

        while lowest > 0 && self.beats_record(lowest - 1) {
            lowest -= 1;
        }
        while lowest <= midpoint && !self.beats_record(lowest) {
            lowest += 1;
        }
        if lowest > midpoint {
            return 0;
        }
        self.time - 2 * lowest + 1
    }
}

fn column_text<'a>(
    pattern: &Regex,
    expected: &'static str,
    number: usize,
    line: &'a str,
) -> Result<&'a str> {
    pattern
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|text| text.as_str())
        .ok_or_else(|| {
            ParseError::Malformed {
                expected,
                found: line.to_string(),
            }
            .at_line(number, line)
        })
}

/// Reads the `Time:` and `Distance:` lines as separate races.
pub fn parse_races(times: &str, distances: &str) -> std::result::Result<Vec<Race>, ParseError> {
    let times = times
        .split_whitespace()
        .map(parse_number)
        .collect::<std::result::Result<Vec<u64>, _>>()?;
    let records = distances
        .split_whitespace()
        .map(parse_number)
        .collect::<std::result::Result<Vec<u64>, _>>()?;
    if times.len() != records.len() {
        return Err(ParseError::Malformed {
            expected: "as many distances as times",
            found: distances.trim().to_string(),
        });
    }
    Ok(times
        .into_iter()
        .zip(records)
        .map(|(time, record)| Race { time, record })
        .collect())
}

/// Reads the columns as one race by ignoring the spaces between digits.
pub fn parse_long_race(times: &str, distances: &str) -> std::result::Result<Race, ParseError> {
    let joined = |text: &str| text.split_whitespace().collect::<String>();
    Ok(Race {
        time: parse_number(&joined(times))?,
        record: parse_number(&joined(distances))?,
    })
}

pub fn solve<R: BufRead>(reader: R) -> Result<RaceTotals> {
    let lines = lines::collect(reader)?;
    let mut content = lines
        .iter()
        .enumerate()
        .map(|(index, line)| (index + 1, line.as_str()))
        .filter(|(_, line)| !line.trim().is_empty());
    let (time_number, time_line) = content
        .next()
        .ok_or_else(|| ToolError::InvalidInput("missing 'Time:' line".to_string()))?;
    let (distance_number, distance_line) = content
        .next()
        .ok_or_else(|| ToolError::InvalidInput("missing 'Distance:' line".to_string()))?;

    let times = column_text(&TIME_PATTERN, "'Time: <numbers>'", time_number, time_line)?;
    let distances = column_text(
        &DISTANCE_PATTERN,
        "'Distance: <numbers>'",
        distance_number,
        distance_line,
    )?;

    let races = parse_races(times, distances)
        .map_err(|error| error.at_line(distance_number, distance_line))?;
    let ways_product = races
        .iter()
        .try_fold(1u64, |product, race| product.checked_mul(race.ways_to_win()))
        .ok_or_else(|| ToolError::Overflow("product of winning ways".to_string()))?;
    let long_race = parse_long_race(times, distances)
        .map_err(|error| error.at_line(distance_number, distance_line))?;

    Ok(RaceTotals {
        ways_product,
        long_race_ways: long_race.ways_to_win(),
    })
}
