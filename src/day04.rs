//! Day 4: paper rolls the forklifts can reach.
//!
//! A roll (`@`) is reachable when fewer than four of its eight neighbours are
//! rolls. Part one counts the reachable rolls; part two keeps removing every
//! reachable roll at once until none are left to take.

use std::io::Write;

use anyhow::{bail, ensure, Result};
use bitvec::prelude::*;
use tracing::debug;

use crate::answer::Answer;

const CROWDED: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Floor {
    rolls: BitVec,
    width: usize,
    height: usize,
}

impl Floor {
    fn parse(input: &str) -> Result<Self> {
        let rows = input.trim().lines().map(str::trim).collect::<Vec<_>>();
        let width = rows.first().map_or(0, |row| row.len());
        let mut rolls = BitVec::with_capacity(width * rows.len());
        for row in &rows {
            ensure!(row.len() == width, "row {:?} is not {} cells wide", row, width);
            for b in row.bytes() {
                match b {
                    b'@' => rolls.push(true),
                    b'.' => rolls.push(false),
                    _ => bail!("unexpected cell {:?} in row {:?}", b as char, row),
                }
            }
        }
        Ok(Floor { rolls, width, height: rows.len() })
    }

    fn neighbours(&self, ri: usize, ci: usize) -> usize {
        let mut count = 0;
        for nr in ri.saturating_sub(1) ..= (ri + 1).min(self.height - 1) {
            for nc in ci.saturating_sub(1) ..= (ci + 1).min(self.width - 1) {
                if (nr, nc) != (ri, ci) && self.rolls[nr * self.width + nc] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Indexes of the rolls with fewer than four neighbouring rolls.
    fn reachable(&self) -> Vec<usize> {
        self.rolls.iter_ones()
            .filter(|&i| self.neighbours(i / self.width, i % self.width) < CROWDED)
            .collect()
    }

    /// Remove every reachable roll at once; returns how many went.
    fn remove_reachable(&mut self) -> usize {
        let reachable = self.reachable();
        for &i in &reachable {
            self.rolls.set(i, false);
        }
        reachable.len()
    }
}

pub fn solve(input: &str, trace: &mut dyn Write) -> Result<Answer> {
    let mut floor = Floor::parse(input)?;
    debug!(width = floor.width, height = floor.height, rolls = floor.rolls.count_ones(), "parsed floor");

    let first = floor.remove_reachable();
    writeln!(trace, "removed: {}", first)?;
    let mut total = first;
    loop {
        let removed = floor.remove_reachable();
        if removed == 0 {
            break;
        }
        writeln!(trace, "removed: {}", removed)?;
        total += removed;
    }

    Ok(Answer::both(first as u128, total as u128))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    const FLOOR: &str = "\
..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@@@
.@.@.@.@@@
@@@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.
";

    #[test]
    fn removes_until_stable() {
        assert_eq!(solve(FLOOR, &mut io::sink()).unwrap(), Answer::both(12, 41));
    }

    #[test]
    fn neighbours_stop_at_the_edges() {
        let floor = Floor::parse("@@@\n@@@\n@@@\n").unwrap();
        assert_eq!(floor.neighbours(0, 0), 3);
        assert_eq!(floor.neighbours(0, 1), 5);
        assert_eq!(floor.neighbours(1, 1), 8);
        // only the corners have fewer than four
        assert_eq!(floor.reachable(), vec![0, 2, 6, 8]);
    }

    #[test]
    fn removal_is_simultaneous() {
        // corners, then edges, then the centre once it is alone
        let mut trace = Vec::new();
        assert_eq!(solve("@@@\n@@@\n@@@\n", &mut trace).unwrap(), Answer::both(4, 9));
        assert_eq!(String::from_utf8(trace).unwrap(), "removed: 4\nremoved: 4\nremoved: 1\n");
    }

    #[test]
    fn empty_floor() {
        assert_eq!(solve("...\n...\n", &mut io::sink()).unwrap(), Answer::both(0, 0));
    }

    #[test]
    fn parse_errors() {
        assert!(Floor::parse("@@\n@\n").is_err());
        assert!(Floor::parse("@#\n").is_err());
    }
}
