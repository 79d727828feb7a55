use advent_puzzles::ToolError;
use advent_puzzles::haunted_wasteland::{Network, gcd, lcm, solve};

fn network(text: &str) -> Network {
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    Network::parse(&lines).expect("network parsed")
}

const DIRECT: &str = "\
RL

AAA = (BBB, CCC)
BBB = (DDD, EEE)
CCC = (ZZZ, GGG)
DDD = (DDD, DDD)
EEE = (EEE, EEE)
GGG = (GGG, GGG)
ZZZ = (ZZZ, ZZZ)
";

const REPEATING: &str = "\
LLR

AAA = (BBB, BBB)
BBB = (AAA, ZZZ)
ZZZ = (ZZZ, ZZZ)
";

const GHOSTS: &str = "\
LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)
";

#[test]
fn direct_route_takes_two_steps() {
    let totals = solve(DIRECT.as_bytes()).expect("network walked");
    assert_eq!(totals.steps, 2);
    assert_eq!(totals.ghost_steps, 2);
}

#[test]
fn instructions_repeat_until_the_finish() {
    let totals = solve(REPEATING.as_bytes()).expect("network walked");
    assert_eq!(totals.steps, 6);
}

#[test]
fn ghosts_meet_at_the_lcm() {
    assert_eq!(network(GHOSTS).ghost_steps().expect("ghosts walked"), 6);
}

#[test]
fn endless_walk_is_an_error() {
    let text = "L\n\nAAA = (BBB, BBB)\nBBB = (AAA, AAA)\nZZZ = (ZZZ, ZZZ)\n";
    assert_eq!(network(text).steps_until("AAA", |name| name == "ZZZ").expect("walked"), None);
    assert!(matches!(solve(text.as_bytes()), Err(ToolError::InvalidInput(_))));
}

#[test]
fn unknown_child_is_rejected() {
    let lines = vec!["L".to_string(), String::new(), "AAA = (QQQ, AAA)".to_string()];
    assert!(matches!(Network::parse(&lines), Err(ToolError::InvalidInput(_))));
}

#[test]
fn bad_instruction_names_its_line() {
    let lines = vec!["LXR".to_string(), String::new(), "AAA = (AAA, AAA)".to_string()];
    assert!(matches!(Network::parse(&lines), Err(ToolError::Line { number: 1, .. })));
}

#[test]
fn gcd_and_lcm() {
    assert_eq!(gcd(12, 18), 6);
    assert_eq!(lcm(4, 6), Some(12));
    assert_eq!(lcm(u64::MAX, u64::MAX - 1), None);
}
