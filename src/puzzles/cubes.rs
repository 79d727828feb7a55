use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ParseError, parse_number};
use crate::model::{CubeDraw, CubeLimits, GameRecord};

static GAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Game (\d+):\s*(.*)\s*$").expect("game pattern compiles"));
static CUBE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d+)\s+([a-z]+)\s*$").expect("cube pattern compiles"));

/// Parses a line of the form `Game 7: 3 blue, 4 red; 1 red, 2 green`.
///
/// The first malformed entry rejects the whole line. A colour listed twice in
/// one draw keeps the later count.
pub fn parse_game(line: &str) -> Result<GameRecord, ParseError> {
    let captures = GAME_PATTERN
        .captures(line)
        .ok_or(ParseError::MalformedGame)?;
    let id: u32 = parse_number(&captures[1])?;
    if id == 0 {
        return Err(ParseError::ZeroGameId);
    }

    let draws = captures[2]
        .split(';')
        .map(parse_draw)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GameRecord { id, draws })
}

fn parse_draw(draw: &str) -> Result<CubeDraw, ParseError> {
    let mut counts = CubeDraw::default();
    for entry in draw.split(',') {
        let captures = CUBE_PATTERN
            .captures(entry)
            .ok_or_else(|| ParseError::MalformedCube(entry.trim().to_string()))?;
        let count: u32 = parse_number(&captures[1])?;
        match &captures[2] {
            "red" => counts.red = count,
            "green" => counts.green = count,
            "blue" => counts.blue = count,
            other => return Err(ParseError::UnknownColor(other.to_string())),
        }
    }
    Ok(counts)
}

impl FromStr for GameRecord {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse_game(line)
    }
}

impl GameRecord {
    /// True when every draw fits within `limits`.
    pub fn is_feasible(&self, limits: &CubeLimits) -> bool {
        self.draws.iter().all(|draw| limits.allows(draw))
    }

    /// Per colour, the largest count seen in any draw.
    pub fn minimum_set(&self) -> CubeDraw {
        self.draws
            .iter()
            .fold(CubeDraw::default(), |fewest, draw| CubeDraw {
                red: fewest.red.max(draw.red),
                green: fewest.green.max(draw.green),
                blue: fewest.blue.max(draw.blue),
            })
    }

    /// Product of the minimum set's three counts, or `None` if it does not
    /// fit in 64 bits.
    pub fn power(&self) -> Option<u64> {
        let fewest = self.minimum_set();
        u64::from(fewest.red)
            .checked_mul(u64::from(fewest.green))?
            .checked_mul(u64::from(fewest.blue))
    }
}
