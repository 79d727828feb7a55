//! Pipe maze: find the loop through the start tile, its farthest point, and
//! the tiles it encloses.

use std::collections::HashSet;
use std::io::BufRead;

use tracing::debug;

use crate::error::{ParseError, Result, ToolError};
use crate::io::lines;
use crate::model::PipeMazeTotals;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    fn opposite(self) -> Self {
        match self {
            Heading::North => Heading::South,
            Heading::East => Heading::West,
            Heading::South => Heading::North,
            Heading::West => Heading::East,
        }
    }
}

/// One grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Ground,
    Start,
    /// A pipe joining two headings.
    Pipe(Heading, Heading),
}

impl Tile {
    pub fn parse(symbol: char) -> std::result::Result<Self, ParseError> {
        use Heading::*;
        Ok(match symbol {
            '|' => Tile::Pipe(North, South),
            '-' => Tile::Pipe(East, West),
            'L' => Tile::Pipe(North, East),
            'J' => Tile::Pipe(North, West),
            '7' => Tile::Pipe(South, West),
            'F' => Tile::Pipe(South, East),
            '.' => Tile::Ground,
            'S' => Tile::Start,
            other => return Err(ParseError::UnknownSymbol(other)),
        })
    }

    fn connects(self, heading: Heading) -> bool {
        matches!(self, Tile::Pipe(a, b) if a == heading || b == heading)
    }
}

type Position = (usize, usize);

/// The tile grid with the start tile resolved to the pipe it must be.
#[derive(Debug, Clone)]
pub struct Maze {
    tiles: Vec<Vec<Tile>>,
    start: Position,
}

impl Maze {
    pub fn parse(lines: &[String]) -> Result<Self> {
        let mut tiles = Vec::new();
        let mut start = None;
        for (index, line) in lines.iter().enumerate() {
            let number = index + 1;
            if line.trim().is_empty() {
                continue;
            }
            let row = line
                .trim_end()
                .chars()
                .map(Tile::parse)
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|error| error.at_line(number, line))?;
            if let Some(column) = row.iter().position(|&tile| tile == Tile::Start) {
                if start.is_some() {
                    return Err(ToolError::InvalidInput(format!(
                        "second start tile on line {number}"
                    )));
                }
                start = Some((tiles.len(), column));
            }
            tiles.push(row);
        }
        let start =
            start.ok_or_else(|| ToolError::InvalidInput("no start tile".to_string()))?;

        let mut maze = Self { tiles, start };
        let exits: Vec<Heading> = Heading::ALL
            .into_iter()
            .filter(|&heading| {
                maze.neighbour(start, heading)
                    .is_some_and(|next| maze.tile(next).connects(heading.opposite()))
            })
            .collect();
        let [first, second] = exits.as_slice() else {
            return Err(ToolError::InvalidInput(format!(
                "start tile connects to {} pipes instead of 2",
                exits.len()
            )));
        };
        maze.tiles[start.0][start.1] = Tile::Pipe(*first, *second);
        Ok(maze)
    }

    fn tile(&self, (row, column): Position) -> Tile {
        self.tiles[row][column]
    }

    fn neighbour(&self, (row, column): Position, heading: Heading) -> Option<Position> {
        let next = match heading {
            Heading::North => (row.checked_sub(1)?, column),
            Heading::South => (row + 1, column),
            Heading::West => (row, column.checked_sub(1)?),
            Heading::East => (row, column + 1),
        };
        self.tiles.get(next.0)?.get(next.1)?;
        Some(next)
    }

    /// Every tile on the loop, in walking order from the start.
    pub fn main_loop(&self) -> Result<Vec<Position>> {
        let Tile::Pipe(mut heading, _) = self.tile(self.start) else {
            return Err(ToolError::InvalidInput("start tile is not a pipe".to_string()));
        };
        let mut path = vec![self.start];
        let mut position = self.start;
        loop {
            position = self
                .neighbour(position, heading)
                .ok_or_else(|| ToolError::InvalidInput("loop leaves the grid".to_string()))?;
            if position == self.start {
                return Ok(path);
            }
            let came_from = heading.opposite();
            heading = match self.tile(position) {
                Tile::Pipe(a, b) if a == came_from => b,
                Tile::Pipe(a, b) if b == came_from => a,
                _ => {
                    return Err(ToolError::InvalidInput(format!(
                        "loop breaks at row {} column {}",
                        position.0 + 1,
                        position.1 + 1
                    )));
                }
            };
            path.push(position);
        }
    }

    /// Tiles strictly inside the loop. Scanning each row left to right, the
    /// inside flips at every loop tile with a northward connection.
    pub fn enclosed(&self, path: &[Position]) -> u64 {
        let on_loop: HashSet<Position> = path.iter().copied().collect();
        let mut enclosed = 0;
        for (row, tiles) in self.tiles.iter().enumerate() {
            let mut inside = false;
            for (column, tile) in tiles.iter().enumerate() {
                if on_loop.contains(&(row, column)) {
                    if tile.connects(Heading::North) {
                        inside = !inside;
                    }
                } else if inside {
                    enclosed += 1;
                }
            }
        }
        enclosed
    }
}

pub fn solve<R: BufRead>(reader: R) -> Result<PipeMazeTotals> {
    let maze = Maze::parse(&lines::collect(reader)?)?;
    let path = maze.main_loop()?;
    debug!(length = path.len(), "loop found");
    Ok(PipeMazeTotals {
        farthest_distance: path.len() as u64 / 2,
        enclosed_tiles: maze.enclosed(&path),
    })
}
