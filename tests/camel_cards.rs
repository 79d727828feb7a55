use advent_puzzles::ParseError;
use advent_puzzles::camel_cards::{HandType, JokerRule, classify, parse_hand, solve, total_winnings};

const SAMPLE: &str = "32T3K 765\nT55J5 684\nKK677 28\nKTJJT 220\nQQQJA 483\n";

fn hand_type(labels: &str, rule: JokerRule) -> HandType {
    parse_hand(&format!("{labels} 1"), rule).expect("parsed").hand_type
}

#[test]
fn sample_totals_winnings_under_both_rules() {
    let totals = solve(SAMPLE.as_bytes()).expect("hands evaluated");
    assert_eq!(totals.winnings, 6440);
    assert_eq!(totals.joker_winnings, 5905);
}

#[test]
fn hand_types_follow_card_counts() {
    assert_eq!(hand_type("AAAAA", JokerRule::Jack), HandType::FiveOfAKind);
    assert_eq!(hand_type("AA8AA", JokerRule::Jack), HandType::FourOfAKind);
    assert_eq!(hand_type("23332", JokerRule::Jack), HandType::FullHouse);
    assert_eq!(hand_type("TTT98", JokerRule::Jack), HandType::ThreeOfAKind);
    assert_eq!(hand_type("23432", JokerRule::Jack), HandType::TwoPair);
    assert_eq!(hand_type("A23A4", JokerRule::Jack), HandType::OnePair);
    assert_eq!(hand_type("23456", JokerRule::Jack), HandType::HighCard);
}

#[test]
fn jokers_join_the_largest_group() {
    assert_eq!(hand_type("QJJQ2", JokerRule::Jack), HandType::TwoPair);
    assert_eq!(hand_type("QJJQ2", JokerRule::Joker), HandType::FourOfAKind);
    assert_eq!(hand_type("JJJJJ", JokerRule::Joker), HandType::FiveOfAKind);
    assert_eq!(hand_type("T55J5", JokerRule::Joker), HandType::FourOfAKind);
    assert_eq!(classify(&[1, 2, 3, 4, 5]), HandType::OnePair);
}

#[test]
fn ties_break_card_by_card() {
    let hands = vec![
        parse_hand("2AAAA 1", JokerRule::Jack).expect("parsed"),
        parse_hand("33332 10", JokerRule::Jack).expect("parsed"),
    ];
    // 33332 wins on the first card, so it takes rank 2.
    assert_eq!(total_winnings(hands).expect("summed"), 1 + 20);
}

#[test]
fn joker_is_the_weakest_single_card() {
    let hands = vec![
        parse_hand("JKKK2 1", JokerRule::Joker).expect("parsed"),
        parse_hand("QQQQ2 10", JokerRule::Joker).expect("parsed"),
    ];
    assert_eq!(total_winnings(hands).expect("summed"), 1 + 20);
}

#[test]
fn bad_hands_are_rejected() {
    assert_eq!(
        parse_hand("32X3K 765", JokerRule::Jack),
        Err(ParseError::UnknownSymbol('X'))
    );
    assert!(matches!(
        parse_hand("32T3 765", JokerRule::Jack),
        Err(ParseError::Malformed { .. })
    ));
    assert!(matches!(
        parse_hand("32T3K", JokerRule::Jack),
        Err(ParseError::Malformed { .. })
    ));
}
