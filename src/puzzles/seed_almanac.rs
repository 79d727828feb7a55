//! Seed almanac: a chain of range maps from seed numbers to locations.

use std::io::BufRead;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{ParseError, Result, ToolError, parse_number};
use crate::io::lines;
use crate::model::AlmanacTotals;

static SEEDS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^seeds:((?:\s+\d+)+)\s*$").expect("seeds pattern compiles"));
static HEADER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-z]+)-to-([a-z]+) map:\s*$").expect("map header pattern compiles")
});
static RANGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d+)\s+(\d+)\s+(\d+)\s*$").expect("map range pattern compiles")
});

const FIRST_CATEGORY: &str = "seed";
const LAST_CATEGORY: &str = "location";

/// Half-open span of numbers `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: u64,
    pub end: u64,
}

/// One `destination source length` row of a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapRange {
    pub destination: u64,
    pub source: u64,
    pub length: u64,
}

impl MapRange {
    fn source_end(&self) -> u64 {
        self.source + self.length
    }

    fn convert(&self, value: u64) -> Option<u64> {
        (self.source..self.source_end())
            .contains(&value)
            .then(|| self.destination + (value - self.source))
    }
}

/// A `<from>-to-<to> map:` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMap {
    pub from: String,
    pub to: String,
    pub ranges: Vec<MapRange>,
}

impl CategoryMap {
    /// Maps a single value. Values outside every range map to themselves.
    pub fn convert(&self, value: u64) -> u64 {
        self.ranges
            .iter()
            .find_map(|range| range.convert(value))
            .unwrap_or(value)
    }

    /// Maps whole spans, splitting them where they straddle range edges.
    pub fn convert_spans(&self, spans: Vec<Span>) -> Vec<Span> {
        let mut converted = Vec::new();
        let mut pending = spans;
        for range in &self.ranges {
            let mut unmatched = Vec::new();
            for span in pending {
                let start = span.start.max(range.source);
                let end = span.end.min(range.source_end());
                if start >= end {
                    unmatched.push(span);
                    continue;
                }
                converted.push(Span {
                    start: range.destination + (start - range.source),
                    end: range.destination + (end - range.source),
                });
                if span.start < start {
                    unmatched.push(Span {
                        start: span.start,
                        end: start,
                    });
                }
                if end < span.end {
                    unmatched.push(Span {
                        start: end,
                        end: span.end,
                    });
                }
            }
            pending = unmatched;
        }
        converted.extend(pending);
        converted
    }
}

/// The parsed almanac: seed numbers plus maps in chain order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Almanac {
    pub seeds: Vec<u64>,
    pub maps: Vec<CategoryMap>,
}

impl Almanac {
    /// Follows one seed through every map.
    pub fn location(&self, seed: u64) -> u64 {
        self.maps.iter().fold(seed, |value, map| map.convert(value))
    }

    /// Reads the seeds line as `start length` pairs.
    pub fn seed_spans(&self) -> Result<Vec<Span>> {
        let pairs = self.seeds.chunks_exact(2);
        if !pairs.remainder().is_empty() {
            return Err(ToolError::InvalidInput(
                "seed ranges need an even number of values".to_string(),
            ));
        }
        pairs
            .map(|pair| -> Result<Span> {
                let (start, length) = (pair[0], pair[1]);
                let end = start.checked_add(length).ok_or_else(|| {
                    ToolError::Overflow(format!("seed range {start} {length}"))
                })?;
                Ok(Span { start, end })
            })
            .collect()
    }

    /// Lowest location over every seed in `spans`.
    pub fn lowest_location_in(&self, spans: Vec<Span>) -> Option<u64> {
        let locations = self
            .maps
            .iter()
            .fold(spans, |spans, map| map.convert_spans(spans));
        locations
            .iter()
            .filter(|span| span.start < span.end)
            .map(|span| span.start)
            .min()
    }
}

/// Parses the almanac and checks that the maps chain from seed to location.
pub fn parse_almanac(lines: &[String]) -> Result<Almanac> {
    let mut numbered = lines
        .iter()
        .enumerate()
        .map(|(index, line)| (index + 1, line.as_str()))
        .filter(|(_, line)| !line.trim().is_empty());

    let (number, line) = numbered
        .next()
        .ok_or_else(|| ToolError::InvalidInput("almanac is empty".to_string()))?;
    let captures = SEEDS_PATTERN.captures(line).ok_or_else(|| {
        ParseError::Malformed {
            expected: "'seeds: <numbers>'",
            found: line.to_string(),
        }
        .at_line(number, line)
    })?;
    let seeds = captures[1]
        .split_whitespace()
        .map(parse_number)
        .collect::<std::result::Result<Vec<u64>, _>>()
        .map_err(|error| error.at_line(number, line))?;

    let mut maps: Vec<CategoryMap> = Vec::new();
    for (number, line) in numbered {
        if let Some(captures) = HEADER_PATTERN.captures(line) {
            maps.push(CategoryMap {
                from: captures[1].to_string(),
                to: captures[2].to_string(),
                ranges: Vec::new(),
            });
            continue;
        }
        let range = parse_range(line).map_err(|error| error.at_line(number, line))?;
        if range.source.checked_add(range.length).is_none()
            || range.destination.checked_add(range.length).is_none()
        {
            return Err(ToolError::Overflow(format!("map range on line {number}")));
        }
        let map = maps.last_mut().ok_or_else(|| {
            ParseError::Malformed {
                expected: "a map header before its ranges",
                found: line.to_string(),
            }
            .at_line(number, line)
        })?;
        map.ranges.push(range);
    }

    let mut category = FIRST_CATEGORY;
    for map in &maps {
        if map.from != category {
            return Err(ToolError::InvalidInput(format!(
                "map '{}-to-{}' does not continue from '{category}'",
                map.from, map.to
            )));
        }
        category = map.to.as_str();
    }
    if category != LAST_CATEGORY {
        return Err(ToolError::InvalidInput(format!(
            "maps end at '{category}' instead of '{LAST_CATEGORY}'"
        )));
    }

    Ok(Almanac { seeds, maps })
}

fn parse_range(line: &str) -> std::result::Result<MapRange, ParseError> {
    let captures = RANGE_PATTERN
        .captures(line)
        .ok_or_else(|| ParseError::Malformed {
            expected: "'<destination> <source> <length>'",
            found: line.to_string(),
        })?;
    Ok(MapRange {
        destination: parse_number(&captures[1])?,
        source: parse_number(&captures[2])?,
        length: parse_number(&captures[3])?,
    })
}

pub fn solve<R: BufRead>(reader: R) -> Result<AlmanacTotals> {
    let almanac = parse_almanac(&lines::collect(reader)?)?;
    debug!(
        seeds = almanac.seeds.len(),
        maps = almanac.maps.len(),
        "almanac parsed"
    );

    let lowest_location = almanac
        .seeds
        .iter()
        .map(|&seed| almanac.location(seed))
        .min()
        .ok_or_else(|| ToolError::InvalidInput("no seeds listed".to_string()))?;
    let lowest_location_in_ranges = almanac
        .lowest_location_in(almanac.seed_spans()?)
        .ok_or_else(|| ToolError::InvalidInput("seed ranges are all empty".to_string()))?;

    Ok(AlmanacTotals {
        lowest_location,
        lowest_location_in_ranges,
    })
}
