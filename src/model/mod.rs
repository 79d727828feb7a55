use std::fmt;

use serde::Serialize;

/// Which end of a line a search starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Leftmost occurrence.
    First,
    /// Rightmost occurrence.
    Last,
}

impl Direction {
    /// Locates `needle` in `haystack` from this direction, returning the byte
    /// index where the occurrence starts.
    pub fn search(self, haystack: &str, needle: &str) -> Option<usize> {
        match self {
            Direction::First => haystack.find(needle),
            Direction::Last => haystack.rfind(needle),
        }
    }

    /// Whether a match at `candidate` replaces the one currently held at
    /// `current`.
    pub fn prefers(self, current: usize, candidate: usize) -> bool {
        match self {
            Direction::First => current > candidate,
            Direction::Last => current <= candidate,
        }
    }
}

/// A value between 1 and 9 found in a line, and where its token starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenMatch {
    /// Digit value, 1 through 9.
    pub value: u32,
    /// Byte index of the first character of the token.
    pub position: usize,
}

/// Cube counts revealed by a single draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CubeDraw {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl fmt::Display for CubeDraw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} red, {} green, {} blue", self.red, self.green, self.blue)
    }
}

/// One parsed game: its identifier and the draws in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub id: u32,
    pub draws: Vec<CubeDraw>,
}

impl fmt::Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Game {}:", self.id)?;
        for (index, draw) in self.draws.iter().enumerate() {
            let separator = if index == 0 { " " } else { "; " };
            write!(f, "{separator}{draw}")?;
        }
        Ok(())
    }
}

/// Largest count of each colour the bag is allowed to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeLimits {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl CubeLimits {
    /// Limits for a bag holding the given number of each colour.
    pub const fn new(red: u32, green: u32, blue: u32) -> Self {
        Self { red, green, blue }
    }

    /// True when no colour of `draw` exceeds its limit.
    pub fn allows(&self, draw: &CubeDraw) -> bool {
        draw.red <= self.red && draw.green <= self.green && draw.blue <= self.blue
    }
}

impl Default for CubeLimits {
    fn default() -> Self {
        Self::new(12, 13, 14)
    }
}

/// Totals produced by the calibration (trebuchet) puzzle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CalibrationTotals {
    /// Sum over lines of first digit * 10 + last digit.
    pub calibration_digits: u64,
    /// Same sum when spelled-out number words also count as digits.
    pub calibration_digits_and_words: u64,
}

/// Totals produced by the cube game puzzle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CubeTotals {
    /// Sum of the ids of games that fit within the bag limits.
    pub feasible_id_sum: u64,
    /// Sum of every game's power.
    pub power_sum: u64,
}

/// Totals produced by the engine schematic puzzle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GearTotals {
    /// Sum of numbers adjacent to at least one symbol.
    pub part_number_sum: u64,
    /// Sum of products for `*` symbols touching exactly two part numbers.
    pub gear_ratio_sum: u64,
}

/// Totals produced by the scratchcard puzzle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScratchcardTotals {
    pub points: u64,
    /// Original cards plus every copy won.
    pub cards: u64,
}

/// Totals produced by the seed almanac puzzle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AlmanacTotals {
    /// Lowest location reached from the listed seeds.
    pub lowest_location: u64,
    /// Lowest location when the seeds line lists `start length` pairs.
    pub lowest_location_in_ranges: u64,
}

/// Totals produced by the boat race puzzle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RaceTotals {
    /// Product of the number of winning hold times over all races.
    pub ways_product: u64,
    /// Winning hold times when the columns are read as one long race.
    pub long_race_ways: u64,
}

/// Totals produced by the camel card puzzle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CamelCardTotals {
    pub winnings: u64,
    /// Winnings when `J` is a joker instead of a jack.
    pub joker_winnings: u64,
}

/// Totals produced by the desert network puzzle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NetworkTotals {
    /// Steps from `AAA` to `ZZZ`.
    pub steps: u64,
    /// Steps until every `..A` walker stands on a `..Z` node at once.
    pub ghost_steps: u64,
}

/// Totals produced by the sequence extrapolation puzzle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MirageTotals {
    pub next_value_sum: i64,
    pub previous_value_sum: i64,
}

/// Totals produced by the pipe maze puzzle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PipeMazeTotals {
    /// Steps along the loop to the tile farthest from the start.
    pub farthest_distance: u64,
    /// Tiles strictly inside the loop.
    pub enclosed_tiles: u64,
}

/// Totals produced by the galaxy expansion puzzle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExpansionTotals {
    /// Sum of pairwise distances when each empty row or column doubles.
    pub distance_sum: u64,
    /// Same sum with the configured expansion factor.
    pub expanded_distance_sum: u64,
}
