use advent_puzzles::model::{Direction, TokenMatch};
use advent_puzzles::solve;
use advent_puzzles::trebuchet::{
    combine, digit_or_word_value, digit_value, find_digit, find_number_word,
};

const DIGIT_SAMPLE: &str = "1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet\n";
const WORD_SAMPLE: &str = "two1nine\neightwothree\nabcone2threexyz\nxtwone3four\n\
4nineeightseven2\nzoneight234\n7pqrstsixteen\n";

fn token(value: u32, position: usize) -> Option<TokenMatch> {
    Some(TokenMatch { value, position })
}

#[test]
fn locates_first_and_last_digits() {
    assert_eq!(find_digit("a1b2c3d4e5f", Direction::First), token(1, 1));
    assert_eq!(find_digit("a1b2c3d4e5f", Direction::Last), token(5, 9));
    assert_eq!(find_digit("treb7uchet", Direction::First), token(7, 4));
    assert_eq!(find_digit("treb7uchet", Direction::Last), token(7, 4));
    assert_eq!(find_digit("no digits here", Direction::First), None);
}

#[test]
fn zero_is_not_a_digit_token() {
    assert_eq!(find_digit("0a0", Direction::First), None);
    assert_eq!(digit_value("05"), Some(55));
}

#[test]
fn locates_number_words() {
    assert_eq!(find_number_word("two1nine", Direction::First), token(2, 0));
    assert_eq!(find_number_word("two1nine", Direction::Last), token(9, 4));
    assert_eq!(find_number_word("sixsix", Direction::Last), token(6, 3));
    assert_eq!(find_number_word("1234", Direction::First), None);
}

#[test]
fn overlapping_words_resolve_by_start_position() {
    assert_eq!(find_number_word("eightwo", Direction::First), token(8, 0));
    assert_eq!(find_number_word("eightwo", Direction::Last), token(2, 4));
    assert_eq!(digit_or_word_value("eightwo"), Some(82));
}

#[test]
fn word_wins_first_only_when_strictly_earlier() {
    assert_eq!(combine(token(1, 3), token(2, 0), Direction::First), token(2, 0));
    assert_eq!(combine(token(1, 0), token(2, 3), Direction::First), token(1, 0));
    assert_eq!(combine(token(1, 3), token(2, 3), Direction::First), token(1, 3));
}

#[test]
fn word_wins_last_on_equal_or_later_position() {
    assert_eq!(combine(token(1, 0), token(2, 3), Direction::Last), token(2, 3));
    assert_eq!(combine(token(1, 3), token(2, 0), Direction::Last), token(1, 3));
    assert_eq!(combine(token(1, 3), token(2, 3), Direction::Last), token(2, 3));
}

#[test]
fn missing_candidates_fall_back_to_the_other_kind() {
    assert_eq!(combine(None, token(4, 2), Direction::First), token(4, 2));
    assert_eq!(combine(token(4, 2), None, Direction::Last), token(4, 2));
    assert_eq!(combine(None, None, Direction::First), None);
}

#[test]
fn puzzle_examples_produce_expected_values() {
    assert_eq!(digit_or_word_value("two1nine"), Some(29));
    assert_eq!(digit_or_word_value("7pqrstsixteen"), Some(76));
    assert_eq!(digit_or_word_value("xtwone3four"), Some(24));
    assert_eq!(digit_or_word_value("zoneight234"), Some(14));
    assert_eq!(digit_value("7pqrstsixteen"), Some(77));
}

#[test]
fn digit_only_lines_agree_on_both_totals() {
    for line in DIGIT_SAMPLE.lines() {
        assert_eq!(digit_value(line), digit_or_word_value(line), "line {line}");
    }
}

#[test]
fn word_only_lines_resolve_from_words() {
    assert_eq!(digit_value("eightwothree"), None);
    assert_eq!(digit_or_word_value("eightwothree"), Some(83));
}

#[test]
fn digit_sample_sums_to_142() {
    let totals = solve::calibrate(DIGIT_SAMPLE.as_bytes()).expect("calibrated");
    assert_eq!(totals.calibration_digits, 142);
    assert_eq!(totals.calibration_digits_and_words, 142);
}

#[test]
fn word_sample_sums_to_281() {
    let totals = solve::calibrate(WORD_SAMPLE.as_bytes()).expect("calibrated");
    assert_eq!(totals.calibration_digits_and_words, 281);
    // "eightwothree" has no digit and adds nothing to the digit total.
    assert_eq!(totals.calibration_digits, 11 + 22 + 33 + 42 + 24 + 77);
}

#[test]
fn blank_and_tokenless_lines_contribute_nothing() {
    let totals = solve::calibrate("\nxyz\n12\n".as_bytes()).expect("calibrated");
    assert_eq!(totals.calibration_digits, 12);
    assert_eq!(totals.calibration_digits_and_words, 12);
}
