//! Camel cards: rank hands by type, then card by card, and pay out bids by
//! rank.

use std::io::BufRead;

use tracing::debug;

use crate::error::{ParseError, Result, ToolError, parse_number};
use crate::io::lines;
use crate::model::CamelCardTotals;

const HAND_SIZE: usize = 5;
const JOKER: u8 = 1;

/// How the `J` card is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JokerRule {
    /// `J` is a jack, ranked between ten and queen.
    Jack,
    /// `J` is the weakest card but stands in for whichever card helps most.
    Joker,
}

/// Hand types from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

/// A parsed hand. Card strengths run from 1 (joker) or 2 up to 14 (ace).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    pub cards: [u8; HAND_SIZE],
    pub bid: u64,
    pub hand_type: HandType,
}

fn card_strength(label: char, rule: JokerRule) -> std::result::Result<u8, ParseError> {
    Ok(match label {
        'A' => 14,
        'K' => 13,
        'Q' => 12,
        'J' => match rule {
            JokerRule::Jack => 11,
            JokerRule::Joker => JOKER,
        },
        'T' => 10,
        digit @ '2'..='9' => digit as u8 - b'0',
        other => return Err(ParseError::UnknownSymbol(other)),
    })
}

/// Classifies a hand. Jokers join the most common other card.
pub fn classify(cards: &[u8; HAND_SIZE]) -> HandType {
    let mut counts = [0u8; 15];
    for &card in cards {
        counts[usize::from(card)] += 1;
    }
    let jokers = std::mem::take(&mut counts[usize::from(JOKER)]);
    counts.sort_unstable_by(|a, b| b.cmp(a));
    counts[0] += jokers;

    match (counts[0], counts[1]) {
        (5, _) => HandType::FiveOfAKind,
        (4, _) => HandType::FourOfAKind,
        (3, 2) => HandType::FullHouse,
        (3, _) => HandType::ThreeOfAKind,
        (2, 2) => HandType::TwoPair,
        (2, _) => HandType::OnePair,
        _ => HandType::HighCard,
    }
}

/// Parses `32T3K 765` under the given rule.
pub fn parse_hand(line: &str, rule: JokerRule) -> std::result::Result<Hand, ParseError> {
    let malformed = || ParseError::Malformed {
        expected: "five cards and a bid",
        found: line.to_string(),
    };
    let mut fields = line.split_whitespace();
    let (Some(labels), Some(bid), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(malformed());
    };

    let strengths = labels
        .chars()
        .map(|label| card_strength(label, rule))
        .collect::<std::result::Result<Vec<u8>, _>>()?;
    let cards: [u8; HAND_SIZE] = strengths.try_into().map_err(|_| malformed())?;

    Ok(Hand {
        hand_type: classify(&cards),
        cards,
        bid: parse_number(bid)?,
    })
}

/// Sorts the hands weakest first and sums rank * bid.
pub fn total_winnings(mut hands: Vec<Hand>) -> Result<u64> {
    hands.sort_by(|a, b| (a.hand_type, a.cards).cmp(&(b.hand_type, b.cards)));
    hands
        .iter()
        .zip(1u64..)
        .try_fold(0u64, |sum, (hand, rank)| {
            hand.bid
                .checked_mul(rank)
                .and_then(|winnings| sum.checked_add(winnings))
        })
        .ok_or_else(|| ToolError::Overflow("total winnings".to_string()))
}

pub fn solve<R: BufRead>(reader: R) -> Result<CamelCardTotals> {
    let mut hands = Vec::new();
    let mut joker_hands = Vec::new();
    for entry in lines::numbered(reader) {
        let (number, line) = entry?;
        if line.trim().is_empty() {
            continue;
        }
        let parse = |rule| parse_hand(&line, rule).map_err(|error| error.at_line(number, &line));
        hands.push(parse(JokerRule::Jack)?);
        joker_hands.push(parse(JokerRule::Joker)?);
    }
    debug!(hands = hands.len(), "hands parsed");

    Ok(CamelCardTotals {
        winnings: total_winnings(hands)?,
        joker_winnings: total_winnings(joker_hands)?,
    })
}
