use std::io::BufRead;
use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::error::{Result, ToolError};
use crate::io::lines;
use crate::model::{
    AlmanacTotals, CalibrationTotals, CamelCardTotals, CubeLimits, CubeTotals, ExpansionTotals,
    GearTotals, MirageTotals, NetworkTotals, PipeMazeTotals, RaceTotals, ScratchcardTotals,
};
use crate::{
    boat_races, camel_cards, cosmic_expansion, cubes, gear_ratios, haunted_wasteland,
    mirage_maintenance, pipe_maze, scratchcards, seed_almanac, trebuchet,
};

/// Reads a calibration document from disk and sums its calibration values.
#[instrument(level = "info", skip_all, fields(input = %input.display()))]
pub fn trebuchet(input: &Path) -> Result<CalibrationTotals> {
    let totals = calibrate(lines::open(input)?)?;
    info!(?totals, "calibration document evaluated");
    Ok(totals)
}

/// Sums the calibration values of every line in `reader`.
///
/// Lines without any digit add nothing to the digit total, and lines without
/// any digit or number word add nothing to the combined total.
pub fn calibrate<R: BufRead>(reader: R) -> Result<CalibrationTotals> {
    let mut totals = CalibrationTotals::default();
    for entry in lines::numbered(reader) {
        let (number, line) = entry?;
        match trebuchet::digit_or_word_value(&line) {
            Some(value) => totals.calibration_digits_and_words += u64::from(value),
            None => {
                warn!(number, "line holds no digit or number word");
                continue;
            }
        }
        match trebuchet::digit_value(&line) {
            Some(value) => totals.calibration_digits += u64::from(value),
            None => debug!(number, "line holds no digit"),
        }
    }
    Ok(totals)
}

/// Reads game records from disk and evaluates them against `limits`.
#[instrument(level = "info", skip_all, fields(input = %input.display(), ?limits))]
pub fn cube_conundrum(input: &Path, limits: CubeLimits) -> Result<CubeTotals> {
    let totals = evaluate_games(lines::open(input)?, limits)?;
    info!(?totals, "game records evaluated");
    Ok(totals)
}

/// Folds every game in `reader` into the feasible-id and power sums.
///
/// Stops at the first line that is not a valid game record, or at the first
/// game whose power no longer fits in the totals.
pub fn evaluate_games<R: BufRead>(reader: R, limits: CubeLimits) -> Result<CubeTotals> {
    let mut totals = CubeTotals::default();
    for entry in lines::numbered(reader) {
        let (number, line) = entry?;
        let game = cubes::parse_game(&line).map_err(|error| error.at_line(number, &line))?;

        let feasible = game.is_feasible(&limits);
        let overflow = || ToolError::Overflow(format!("power of game {} on line {number}", game.id));
        let power = game.power().ok_or_else(overflow)?;
        debug!(id = game.id, draws = game.draws.len(), feasible, power, "game evaluated");

        if feasible {
            totals.feasible_id_sum = totals
                .feasible_id_sum
                .checked_add(u64::from(game.id))
                .ok_or_else(|| ToolError::Overflow(format!("feasible id sum on line {number}")))?;
        }
        totals.power_sum = totals.power_sum.checked_add(power).ok_or_else(overflow)?;
    }
    Ok(totals)
}

/// Reads an engine schematic and sums its part numbers and gear ratios.
#[instrument(level = "info", skip_all, fields(input = %input.display()))]
pub fn gear_ratios(input: &Path) -> Result<GearTotals> {
    let totals = gear_ratios::solve(lines::open(input)?)?;
    info!(?totals, "engine schematic evaluated");
    Ok(totals)
}

#[instrument(level = "info", skip_all, fields(input = %input.display()))]
pub fn scratchcards(input: &Path) -> Result<ScratchcardTotals> {
    let totals = scratchcards::solve(lines::open(input)?)?;
    info!(?totals, "scratchcards evaluated");
    Ok(totals)
}

#[instrument(level = "info", skip_all, fields(input = %input.display()))]
pub fn seed_almanac(input: &Path) -> Result<AlmanacTotals> {
    let totals = seed_almanac::solve(lines::open(input)?)?;
    info!(?totals, "almanac evaluated");
    Ok(totals)
}

#[instrument(level = "info", skip_all, fields(input = %input.display()))]
pub fn boat_races(input: &Path) -> Result<RaceTotals> {
    let totals = boat_races::solve(lines::open(input)?)?;
    info!(?totals, "races evaluated");
    Ok(totals)
}

#[instrument(level = "info", skip_all, fields(input = %input.display()))]
pub fn camel_cards(input: &Path) -> Result<CamelCardTotals> {
    let totals = camel_cards::solve(lines::open(input)?)?;
    info!(?totals, "hands evaluated");
    Ok(totals)
}

#[instrument(level = "info", skip_all, fields(input = %input.display()))]
pub fn haunted_wasteland(input: &Path) -> Result<NetworkTotals> {
    let totals = haunted_wasteland::solve(lines::open(input)?)?;
    info!(?totals, "network walked");
    Ok(totals)
}

#[instrument(level = "info", skip_all, fields(input = %input.display()))]
pub fn mirage_maintenance(input: &Path) -> Result<MirageTotals> {
    let totals = mirage_maintenance::solve(lines::open(input)?)?;
    info!(?totals, "histories extrapolated");
    Ok(totals)
}

#[instrument(level = "info", skip_all, fields(input = %input.display()))]
pub fn pipe_maze(input: &Path) -> Result<PipeMazeTotals> {
    let totals = pipe_maze::solve(lines::open(input)?)?;
    info!(?totals, "pipe maze evaluated");
    Ok(totals)
}

/// Reads a galaxy image and sums pair distances at double and at `factor`
/// expansion.
#[instrument(level = "info", skip_all, fields(input = %input.display(), factor = factor))]
pub fn cosmic_expansion(input: &Path, factor: u64) -> Result<ExpansionTotals> {
    let totals = cosmic_expansion::solve(lines::open(input)?, factor)?;
    info!(?totals, "galaxy image evaluated");
    Ok(totals)
}
