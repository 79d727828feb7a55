use advent_puzzles::ToolError;
use advent_puzzles::scratchcards::{parse_card, solve};

const SAMPLE: &str = "\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";

#[test]
fn sample_scores_points_and_copies() {
    let totals = solve(SAMPLE.as_bytes()).expect("cards evaluated");
    assert_eq!(totals.points, 13);
    assert_eq!(totals.cards, 30);
}

#[test]
fn points_double_per_match() {
    let card = parse_card("Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53").expect("parsed");
    assert_eq!(card.id, 1);
    assert_eq!(card.matches(), 4);
    assert_eq!(card.points(), Some(8));

    let card = parse_card("Card 9: 1 | 2").expect("parsed");
    assert_eq!(card.points(), Some(0));
}

#[test]
fn copies_stop_at_the_last_card() {
    let totals = solve("Card 1: 1 2 | 1 2\n".as_bytes()).expect("cards evaluated");
    assert_eq!(totals.points, 2);
    assert_eq!(totals.cards, 1);
}

#[test]
fn missing_separator_is_reported_with_its_line() {
    let error = solve("Card 1: 1 | 1\nCard 2: 3 4\n".as_bytes()).expect_err("no '|'");
    assert!(matches!(error, ToolError::Line { number: 2, .. }));
}
