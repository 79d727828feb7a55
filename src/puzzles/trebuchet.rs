//! Calibration values: the first and last digit of a line, optionally also
//! accepting the spelled-out words "one" through "nine".

use crate::model::{Direction, TokenMatch};

const DIGITS: [(&str, u32); 9] = [
    ("1", 1),
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
];

const NUMBER_WORDS: [(&str, u32); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

/// Finds the first or last digit character in `line`.
pub fn find_digit(line: &str, direction: Direction) -> Option<TokenMatch> {
    locate(line, &DIGITS, direction)
}

/// Finds the first or last number word in `line`.
pub fn find_number_word(line: &str, direction: Direction) -> Option<TokenMatch> {
    locate(line, &NUMBER_WORDS, direction)
}

fn locate(line: &str, tokens: &[(&str, u32)], direction: Direction) -> Option<TokenMatch> {
    let mut best: Option<TokenMatch> = None;
    for &(token, value) in tokens {
        let Some(position) = direction.search(line, token) else {
            continue;
        };
        let replace = match best {
            Some(current) => direction.prefers(current.position, position),
            None => true,
        };
        if replace {
            best = Some(TokenMatch { value, position });
        }
    }
    best
}

/// Picks between the digit and word candidates for one end of a line.
///
/// At the start the word wins only when it sits strictly before the digit. At
/// the end the word wins unless it sits strictly before the digit.
pub fn combine(
    digit: Option<TokenMatch>,
    word: Option<TokenMatch>,
    direction: Direction,
) -> Option<TokenMatch> {
    match (digit, word) {
        (None, word) => word,
        (Some(digit), None) => Some(digit),
        (Some(digit), Some(word)) => {
            let word_wins = match direction {
                Direction::First => digit.position > word.position,
                Direction::Last => word.position >= digit.position,
            };
            Some(if word_wins { word } else { digit })
        }
    }
}

/// First digit * 10 + last digit, or `None` when the line has no digit.
pub fn digit_value(line: &str) -> Option<u32> {
    let first = find_digit(line, Direction::First)?;
    let last = find_digit(line, Direction::Last)?;
    Some(first.value * 10 + last.value)
}

/// Calibration value when number words count as digits, or `None` when the
/// line holds neither.
pub fn digit_or_word_value(line: &str) -> Option<u32> {
    let first = combine(
        find_digit(line, Direction::First),
        find_number_word(line, Direction::First),
        Direction::First,
    )?;
    let last = combine(
        find_digit(line, Direction::Last),
        find_number_word(line, Direction::Last),
        Direction::Last,
    )?;
    Some(first.value * 10 + last.value)
}
