//! Desert network: follow left/right instructions through named nodes.

use std::collections::{HashMap, HashSet};
use std::io::BufRead;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{ParseError, Result, ToolError};
use crate::io::lines;
use crate::model::NetworkTotals;

static NODE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\w+)\s*=\s*\(\s*(\w+)\s*,\s*(\w+)\s*\)\s*$").expect("node pattern compiles")
});

const START: &str = "AAA";
const FINISH: &str = "ZZZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

/// Instructions plus the node graph, with names resolved to indices.
#[derive(Debug, Clone)]
pub struct Network {
    pub turns: Vec<Turn>,
    names: Vec<String>,
    index: HashMap<String, usize>,
    children: Vec<(usize, usize)>,
}

impl Network {
    /// Parses the instruction line, a blank line, then `AAA = (BBB, CCC)` lines.
    pub fn parse(lines: &[String]) -> Result<Self> {
        let mut content = lines
            .iter()
            .enumerate()
            .map(|(index, line)| (index + 1, line.as_str()))
            .filter(|(_, line)| !line.trim().is_empty());

        let (number, line) = content
            .next()
            .ok_or_else(|| ToolError::InvalidInput("network is empty".to_string()))?;
        let turns = line
            .trim()
            .chars()
            .map(|turn| match turn {
                'L' => Ok(Turn::Left),
                'R' => Ok(Turn::Right),
                other => Err(ParseError::UnknownSymbol(other)),
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|error| error.at_line(number, line))?;

        let mut edges = Vec::new();
        for (number, line) in content {
            let captures = NODE_PATTERN.captures(line).ok_or_else(|| {
                ParseError::Malformed {
                    expected: "'<node> = (<left>, <right>)'",
                    found: line.to_string(),
                }
                .at_line(number, line)
            })?;
            edges.push((
                captures[1].to_string(),
                captures[2].to_string(),
                captures[3].to_string(),
            ));
        }

        let names: Vec<String> = edges.iter().map(|(name, _, _)| name.clone()).collect();
        let index: HashMap<String, usize> = names
            .iter()
            .enumerate()
            .map(|(position, name)| (name.clone(), position))
            .collect();
        let lookup = |name: &str| {
            index
                .get(name)
                .copied()
                .ok_or_else(|| ToolError::InvalidInput(format!("unknown node '{name}'")))
        };
        let children = edges
            .iter()
            .map(|(_, left, right)| -> Result<(usize, usize)> {
                Ok((lookup(left)?, lookup(right)?))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            turns,
            names,
            index,
            children,
        })
    }

    fn step(&self, node: usize, turn: Turn) -> usize {
        let (left, right) = self.children[node];
        match turn {
            Turn::Left => left,
            Turn::Right => right,
        }
    }

    /// Steps from `from` until `is_end` holds, or `None` if the walk loops
    /// without ever getting there.
    pub fn steps_until(&self, from: &str, is_end: impl Fn(&str) -> bool) -> Result<Option<u64>> {
        if self.turns.is_empty() {
            return Err(ToolError::InvalidInput("no instructions".to_string()));
        }
        let mut node = *self
            .index
            .get(from)
            .ok_or_else(|| ToolError::InvalidInput(format!("unknown node '{from}'")))?;
        let mut seen = HashSet::new();
        let mut steps = 0u64;
        let mut position = 0;
        loop {
            if is_end(&self.names[node]) {
                return Ok(Some(steps));
            }
            if !seen.insert((node, position)) {
                return Ok(None);
            }
            node = self.step(node, self.turns[position]);
            position = (position + 1) % self.turns.len();
            steps += 1;
        }
    }

    /// Steps until every walker that starts on a `..A` node stands on a `..Z`
    /// node at the same time, taken as the lcm of each walker's first arrival.
    pub fn ghost_steps(&self) -> Result<u64> {
        let starts: Vec<&String> = self.names.iter().filter(|name| name.ends_with('A')).collect();
        if starts.is_empty() {
            return Err(ToolError::InvalidInput("no node ends with 'A'".to_string()));
        }
        let mut total = 1u64;
        for start in starts {
            let steps = self
                .steps_until(start, |name| name.ends_with('Z'))?
                .ok_or_else(|| {
                    ToolError::InvalidInput(format!("walker from '{start}' never reaches a Z node"))
                })?;
            debug!(start = %start, steps, "walker arrived");
            total = lcm(total, steps)
                .ok_or_else(|| ToolError::Overflow("ghost step count".to_string()))?;
        }
        Ok(total)
    }
}

pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// Least common multiple, or `None` on overflow. `lcm(x, 0)` is 0.
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

pub fn solve<R: BufRead>(reader: R) -> Result<NetworkTotals> {
    let network = Network::parse(&lines::collect(reader)?)?;
    let steps = network
        .steps_until(START, |name| name == FINISH)?
        .ok_or_else(|| ToolError::InvalidInput(format!("'{START}' never reaches '{FINISH}'")))?;
    Ok(NetworkTotals {
        steps,
        ghost_steps: network.ghost_steps()?,
    })
}
