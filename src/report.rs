use std::fmt::Display;
use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::model::{
    AlmanacTotals, CalibrationTotals, CamelCardTotals, CubeTotals, ExpansionTotals, GearTotals,
    MirageTotals, NetworkTotals, PipeMazeTotals, RaceTotals, ScratchcardTotals,
};

/// How totals are written to the output stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// One integer per line, in the puzzle's fixed order.
    #[default]
    Plain,
    /// A single JSON object keyed by total name.
    Json,
}

/// A pair of puzzle totals that can be printed.
pub trait Totals: Serialize {
    type Value: Display;

    /// The totals in their fixed print order.
    fn values(&self) -> [Self::Value; 2];
}

macro_rules! impl_totals {
    ($($totals:ty => $value:ty { $first:ident, $second:ident }),+ $(,)?) => {
        $(
            impl Totals for $totals {
                type Value = $value;

                fn values(&self) -> [$value; 2] {
                    [self.$first, self.$second]
                }
            }
        )+
    };
}

impl_totals! {
    CalibrationTotals => u64 { calibration_digits, calibration_digits_and_words },
    CubeTotals => u64 { feasible_id_sum, power_sum },
    GearTotals => u64 { part_number_sum, gear_ratio_sum },
    ScratchcardTotals => u64 { points, cards },
    AlmanacTotals => u64 { lowest_location, lowest_location_in_ranges },
    RaceTotals => u64 { ways_product, long_race_ways },
    CamelCardTotals => u64 { winnings, joker_winnings },
    NetworkTotals => u64 { steps, ghost_steps },
    MirageTotals => i64 { next_value_sum, previous_value_sum },
    PipeMazeTotals => u64 { farthest_distance, enclosed_tiles },
    ExpansionTotals => u64 { distance_sum, expanded_distance_sum },
}

/// Writes `totals` to `out` in the requested format.
pub fn write<T: Totals, W: Write>(out: &mut W, totals: &T, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Plain => {
            for value in totals.values() {
                writeln!(out, "{value}")?;
            }
        }
        ReportFormat::Json => {
            serde_json::to_writer(&mut *out, totals)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
