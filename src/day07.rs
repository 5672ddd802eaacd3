//! Day 7: the tachyon manifold.
//!
//! A beam enters below `S` and moves down one row at a time. A splitter
//! (`^`) stops it and sends one beam down from each side. Part one counts
//! the splitters hit; part two counts the timelines, one per distinct path a
//! single particle could take.

use std::collections::BTreeMap;
use std::io::Write;

use anyhow::{bail, Context, Result};
use itertools::Itertools;
use tracing::debug;

use crate::answer::Answer;

#[derive(Debug, Default, PartialEq, Eq)]
struct Beams {
    splits: u64,
    timelines: u128,
}

fn run(rows: &[&[u8]], trace: &mut dyn Write) -> Result<Beams> {
    let Some((first, rest)) = rows.split_first() else {bail!("empty manifold")};
    let start = first.iter().position(|&b| b == b'S').context("no start 'S' in the first row")?;

    // column -> timelines reaching it
    let mut beams = BTreeMap::from([(start, 1u128)]);
    let mut result = Beams::default();
    for (ri, row) in rest.iter().enumerate() {
        let mut next = BTreeMap::new();
        for (&ci, &timelines) in &beams {
            match row.get(ci) {
                Some(b'^') => {
                    result.splits += 1;
                    for side in [ci.checked_sub(1), ci.checked_add(1)] {
                        match side.filter(|&c| c < row.len()) {
                            Some(c) => *next.entry(c).or_insert(0) += timelines,
                            // off the side: the timeline ends here
                            None => result.timelines += timelines,
                        }
                    }
                }
                Some(b'.' | b'|' | b'S') | None => *next.entry(ci).or_insert(0) += timelines,
                Some(&b) => bail!("unexpected cell {:?} in row {}", b as char, ri + 1),
            }
        }
        beams = next;
        writeln!(trace, "row {}: {}", ri + 1, beams.keys().join(","))?;
    }
    result.timelines += beams.values().sum::<u128>();
    Ok(result)
}

pub fn solve(input: &str, trace: &mut dyn Write) -> Result<Answer> {
    let rows = input.trim().lines().map(|line| line.trim().as_bytes()).collect::<Vec<_>>();
    debug!(rows = rows.len(), "parsed manifold");
    let beams = run(&rows, trace)?;
    Ok(Answer::both(beams.splits.into(), beams.timelines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    const EXAMPLE: &str = "\
.......S.......
...............
.......^.......
...............
......^.^......
...............
.....^.^.^.....
...............
....^.^...^....
...............
...^.^...^.^...
...............
..^...^.....^..
...............
.^.^.^.^.^...^.
...............
";

    #[test]
    fn example() {
        assert_eq!(solve(EXAMPLE, &mut io::sink()).unwrap(), Answer::both(21, 40));
    }

    #[test]
    fn beams_merge_but_timelines_add() {
        // both halves land on the middle splitter's column again
        let input = "..S..\n..^..\n.....\n.^.^.\n.....\n";
        assert_eq!(solve(input, &mut io::sink()).unwrap(), Answer::both(3, 4));
    }

    #[test]
    fn beam_leaving_the_side_ends_its_timeline() {
        assert_eq!(solve("S.\n^.\n..\n", &mut io::sink()).unwrap(), Answer::both(1, 2));
    }

    #[test]
    fn no_splitters() {
        assert_eq!(solve("S\n.\n.\n", &mut io::sink()).unwrap(), Answer::both(0, 1));
    }

    #[test]
    fn errors() {
        assert!(solve("...\n.^.\n", &mut io::sink()).is_err());
        assert!(solve("S..\n#..\n", &mut io::sink()).is_err());
        assert!(solve("", &mut io::sink()).is_err());
    }

    #[test]
    fn trace_lists_beam_columns() {
        let mut trace = Vec::new();
        solve("..S..\n..^..\n.....\n", &mut trace).unwrap();
        assert_eq!(String::from_utf8(trace).unwrap(), "row 1: 1,3\nrow 2: 1,3\n");
    }
}
