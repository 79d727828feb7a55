//! Core library for the advent-puzzles command line application.
//!
//! Each puzzle follows the same line-oriented shape: [`io::lines`] reads the
//! input, an evaluator under [`puzzles`] extracts values from it, [`solve`]
//! wraps the evaluator with input handling and tracing, and [`report`] prints
//! the result. Shared data types live in [`model`].

pub mod error;
pub mod io;
pub mod model;
pub mod puzzles;
pub mod report;
pub mod solve;

pub use error::{ParseError, Result, ToolError};
pub use puzzles::{
    boat_races, camel_cards, cosmic_expansion, cubes, gear_ratios, haunted_wasteland,
    mirage_maintenance, pipe_maze, scratchcards, seed_almanac, trebuchet,
};
