use advent_puzzles::cosmic_expansion::{DEFAULT_EXPANSION, Image, solve};
use advent_puzzles::{ParseError, ToolError};

const SAMPLE: &str = "\
...#......
.......#..
#.........
..........
......#...
.#........
.........#
..........
.......#..
#...#.....
";

fn image(text: &str) -> Image {
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    Image::parse(&lines).expect("image parsed")
}

#[test]
fn sample_distances_grow_with_the_factor() {
    let image = image(SAMPLE);
    assert_eq!(image.galaxies.len(), 9);
    assert_eq!(image.distance_sum(2).expect("summed"), 374);
    assert_eq!(image.distance_sum(10).expect("summed"), 1030);
    assert_eq!(image.distance_sum(100).expect("summed"), 8410);
}

#[test]
fn solve_reports_doubled_and_configured_sums() {
    let totals = solve(SAMPLE.as_bytes(), 100).expect("image evaluated");
    assert_eq!(totals.distance_sum, 374);
    assert_eq!(totals.expanded_distance_sum, 8410);
}

#[test]
fn factor_one_leaves_the_image_unchanged() {
    // Two galaxies two rows and three columns apart.
    let image = image("#...\n....\n...#\n");
    assert_eq!(image.distance_sum(1).expect("summed"), 5);
    assert_eq!(image.distance_sum(2).expect("summed"), 8);
}

#[test]
fn zero_factor_is_rejected() {
    assert!(matches!(image(SAMPLE).distance_sum(0), Err(ToolError::InvalidInput(_))));
}

#[test]
fn huge_factor_overflows_cleanly() {
    let image = image("#.#\n");
    assert_eq!(image.distance_sum(DEFAULT_EXPANSION).expect("summed"), 1_000_001);
    assert!(matches!(image.distance_sum(u64::MAX), Err(ToolError::Overflow(_))));
}

#[test]
fn unknown_symbols_are_rejected() {
    let lines = vec!["..#".to_string(), ".o.".to_string()];
    match Image::parse(&lines) {
        Err(ToolError::Line { number, source, .. }) => {
            assert_eq!(number, 2);
            assert_eq!(source, ParseError::UnknownSymbol('o'));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
