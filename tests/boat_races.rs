use advent_puzzles::boat_races::{Race, parse_long_race, parse_races, solve};

const SAMPLE: &str = "Time:      7  15   30\nDistance:  9  40  200\n";

#[test]
fn sample_multiplies_ways_to_win() {
    let totals = solve(SAMPLE.as_bytes()).expect("races evaluated");
    assert_eq!(totals.ways_product, 288);
    assert_eq!(totals.long_race_ways, 71503);
}

#[test]
fn each_race_counts_strict_wins() {
    let races = parse_races("7  15   30", "9  40  200").expect("parsed");
    let ways: Vec<u64> = races.iter().map(Race::ways_to_win).collect();
    assert_eq!(ways, vec![4, 8, 9]);
}

#[test]
fn tying_the_record_is_not_a_win() {
    // Holding 2 or 3 of 5 ms travels exactly 6.
    assert_eq!(Race { time: 5, record: 6 }.ways_to_win(), 0);
    assert_eq!(Race { time: 5, record: 5 }.ways_to_win(), 2);
}

#[test]
fn unbeatable_record_has_no_ways() {
    assert_eq!(Race { time: 3, record: 100 }.ways_to_win(), 0);
    assert_eq!(Race { time: 0, record: 0 }.ways_to_win(), 0);
}

#[test]
fn long_race_joins_the_columns() {
    let race = parse_long_race("7  15   30", "9  40  200").expect("parsed");
    assert_eq!(race, Race { time: 71530, record: 940200 });
}

#[test]
fn large_race_does_not_overflow() {
    let race = Race { time: u64::MAX, record: u64::MAX };
    assert!(race.ways_to_win() > 0);
}
