//! Published example inputs, read from `puzzles/` the way the binaries read them.

use std::fs;
use std::path::PathBuf;

use aoc2023::galaxy::Universe;
use aoc2023::platform::{Direction, Platform};
use aoc2023::{lens, mirror, springs, Error};

fn puzzle(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("puzzles");
    path.push(name);
    path
}

#[test]
fn test_galaxies() {
    let universe = Universe::read_from_file(puzzle("galaxies.txt")).unwrap();
    assert_eq!(universe.distance_sum(1), 374);
    assert_eq!(universe.distance_sum(99), 8410);
}

#[test]
fn test_springs() {
    let records = springs::read_records(puzzle("springs.txt")).unwrap();
    assert_eq!(records.len(), 6);

    let total = |folds| -> u64 { records.iter().map(|r| r.unfold(folds).arrangements()).sum() };
    assert_eq!(total(1), 21);
    assert_eq!(total(5), 525152);

    let brute: u64 = records.iter().map(|r| r.arrangements_brute()).sum();
    assert_eq!(brute, 21);
}

#[test]
fn test_mirrors() {
    let patterns = mirror::read_patterns(puzzle("mirrors.txt")).unwrap();
    assert_eq!(patterns.len(), 2);
    assert_eq!(mirror::summarize(&patterns, 0), 405);
    assert_eq!(mirror::summarize(&patterns, 1), 400);
}

#[test]
fn test_platform() {
    let mut tilted = Platform::read_from_file(puzzle("platform.txt")).unwrap();
    tilted.tilt(Direction::North);
    assert_eq!(tilted.north_load(), 136);

    let mut spun = Platform::read_from_file(puzzle("platform.txt")).unwrap();
    spun.spin_cycles(1_000_000_000);
    assert_eq!(spun.north_load(), 64);
}

#[test]
fn test_lenses() {
    let steps = lens::read_steps(puzzle("lenses.txt")).unwrap();
    assert_eq!(steps.len(), 11);
    assert_eq!(lens::hash_sum(&steps), 1320);
    assert_eq!(lens::focusing_power(&steps), 145);
}

#[test]
fn test_noise_lines_are_filtered() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(
        &path,
        "# galaxies\n#.#\n\n...\nthis line is noise\n..#\n",
    )
    .unwrap();

    let universe = Universe::read_from_file(&path).unwrap();
    assert_eq!(universe.galaxies().len(), 3);
    assert_eq!(universe.distance_sum(0), 8);
}

#[test]
fn test_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");

    let err = Platform::read_from_file(&path).unwrap_err();
    assert!(matches!(err, Error::Open { .. }));
    assert!(err.to_string().contains("input.txt"));

    assert!(lens::read_steps(&path).is_err());
    assert!(mirror::read_patterns(&path).is_err());
}
