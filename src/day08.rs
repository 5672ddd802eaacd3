//! Day 8: junction box circuits.
//!
//! Junction boxes are joined pairwise, closest pair first. Part one
//! multiplies the sizes of the three largest circuits after a fixed number of
//! connections; part two multiplies the x coordinates of the pair whose
//! connection first puts every box on one circuit.

use std::io::Write;
use std::str::FromStr;

use anyhow::{bail, ensure, Context, Error, Result};
use itertools::Itertools;
use tracing::debug;

use crate::answer::Answer;

/// Connections made for part one on a full puzzle input.
const CONNECTIONS: usize = 1000;
/// Connections made for part one on the small worked example, which is
/// already a single circuit after [`CONNECTIONS`].
const SAMPLE_CONNECTIONS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JunctionBox {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl FromStr for JunctionBox {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let coords = line.split(',')
            .map(|n| n.trim().parse().with_context(|| format!("bad coordinate {:?} in {:?}", n, line)))
            .collect::<Result<Vec<u32>>>()?;
        let &[x, y, z] = coords.as_slice() else {
            bail!("junction box {:?} is not of the form x,y,z", line)
        };
        Ok(JunctionBox { x, y, z })
    }
}

impl JunctionBox {
    fn distance_squared(self, other: JunctionBox) -> u128 {
        [(self.x, other.x), (self.y, other.y), (self.z, other.z)].iter()
            .map(|&(a, b)| u128::from(a.abs_diff(b)).pow(2))
            .sum()
    }
}

/// Disjoint sets of junction boxes.
#[derive(Debug, Clone)]
struct Circuits {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl Circuits {
    fn new(n: usize) -> Self {
        Circuits { parent: (0 .. n).collect(), size: vec![1; n], count: n }
    }

    fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    /// Join the circuits of `a` and `b`; false when they already share one.
    fn connect(&mut self, a: usize, b: usize) -> bool {
        let (a, b) = (self.find(a), self.find(b));
        if a == b {
            return false;
        }
        let (big, small) = if self.size[a] >= self.size[b] {(a, b)} else {(b, a)};
        self.parent[small] = big;
        self.size[big] += self.size[small];
        self.count -= 1;
        true
    }

    /// Product of the three largest circuit sizes, 0 with fewer than three circuits.
    fn largest_three(&self) -> u128 {
        let sizes = (0 .. self.parent.len())
            .filter(|&i| self.parent[i] == i)
            .map(|i| self.size[i])
            .sorted_unstable_by(|a, b| b.cmp(a))
            .collect::<Vec<_>>();
        match sizes.as_slice() {
            [a, b, c, ..] => (*a as u128) * (*b as u128) * (*c as u128),
            _ => 0,
        }
    }
}

pub fn solve(input: &str, trace: &mut dyn Write) -> Result<Answer> {
    let boxes = input.trim().lines()
        .map(|line| line.trim().parse())
        .collect::<Result<Vec<JunctionBox>>>()?;
    ensure!(boxes.len() >= 2, "need at least two junction boxes, got {}", boxes.len());

    // stable sort keeps equal distances in (i, j) order
    let mut pairs = (0 .. boxes.len()).tuple_combinations()
        .map(|(i, j)| (boxes[i].distance_squared(boxes[j]), i, j))
        .collect::<Vec<_>>();
    pairs.sort_by_key(|&(distance, _, _)| distance);
    debug!(boxes = boxes.len(), pairs = pairs.len(), "sorted pairs");

    let mut circuits = Circuits::new(boxes.len());
    let mut after_sample = None;
    let mut after_full = None;
    let mut last = None;
    for (k, &(_, i, j)) in pairs.iter().enumerate() {
        if k == SAMPLE_CONNECTIONS {
            after_sample = Some(circuits.largest_three());
        }
        if k == CONNECTIONS {
            after_full = Some(circuits.largest_three());
        }
        if last.is_some() && k >= CONNECTIONS {
            break;
        }
        if circuits.connect(i, j) {
            let (a, b) = (boxes[i], boxes[j]);
            writeln!(trace, "connect: {},{},{} - {},{},{}", a.x, a.y, a.z, b.x, b.y, b.z)?;
            if circuits.count == 1 {
                last = Some((k, a, b));
            }
        }
    }

    let (k, a, b) = last.context("junction boxes never formed one circuit")?;
    let p1 = if k < CONNECTIONS {
        // one circuit within the full connection count: a sample-sized input
        after_sample.unwrap_or_else(|| circuits.largest_three())
    } else {
        after_full.unwrap_or_else(|| circuits.largest_three())
    };
    Ok(Answer::both(p1, u128::from(a.x) * u128::from(b.x)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    const EXAMPLE: &str = "\
162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689
";

    #[test]
    fn example() {
        assert_eq!(solve(EXAMPLE, &mut io::sink()).unwrap(), Answer::both(40, 25272));
    }

    #[test]
    fn closest_pair_connects_first() {
        let mut trace = Vec::new();
        solve(EXAMPLE, &mut trace).unwrap();
        let trace = String::from_utf8(trace).unwrap();
        assert_eq!(trace.lines().next(), Some("connect: 162,817,812 - 425,690,689"));
        // a tree over 20 boxes
        assert_eq!(trace.lines().count(), 19);
    }

    #[test]
    fn thousand_connections_leave_separate_circuits() {
        // two lines of 46 boxes and one of 3, far apart; every pair inside a
        // group is closer than any pair across groups
        let input = (0 .. 46)
            .chain(10_000 .. 10_046)
            .chain(30_000 .. 30_003)
            .map(|x| format!("{},0,0", x))
            .join("\n");
        assert_eq!(
            solve(&input, &mut io::sink()).unwrap(),
            Answer::both(46 * 46 * 3, 10_045 * 30_000)
        );
    }

    #[test]
    fn circuits_track_sizes() {
        let mut circuits = Circuits::new(5);
        assert_eq!(circuits.largest_three(), 1);
        assert!(circuits.connect(0, 1));
        assert!(circuits.connect(1, 2));
        assert!(!circuits.connect(2, 0));
        assert_eq!(circuits.count, 3);
        assert_eq!(circuits.largest_three(), 3);
        assert!(circuits.connect(3, 4));
        assert_eq!(circuits.largest_three(), 0);
    }

    #[test]
    fn distance_uses_every_axis() {
        let a: JunctionBox = "0,0,0".parse().unwrap();
        let b: JunctionBox = "1,2,3".parse().unwrap();
        assert_eq!(a.distance_squared(b), 14);
        let far = JunctionBox { x: u32::MAX, y: u32::MAX, z: u32::MAX };
        assert_eq!(a.distance_squared(far), 3 * u128::from(u32::MAX).pow(2));
    }

    #[test]
    fn parse_errors() {
        assert!("1,2".parse::<JunctionBox>().is_err());
        assert!("1,2,3,4".parse::<JunctionBox>().is_err());
        assert!("1,-2,3".parse::<JunctionBox>().is_err());
        assert!(solve("1,2,3\n", &mut io::sink()).is_err());
    }
}
