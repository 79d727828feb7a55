//! One evaluator per puzzle. Each reads its whole input from a `BufRead` and
//! returns the puzzle's pair of totals.

pub mod boat_races;
pub mod camel_cards;
pub mod cosmic_expansion;
pub mod cubes;
pub mod gear_ratios;
pub mod haunted_wasteland;
pub mod mirage_maintenance;
pub mod pipe_maze;
pub mod scratchcards;
pub mod seed_almanac;
pub mod trebuchet;
