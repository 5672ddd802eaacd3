//! Day 12: packing presents under the trees.
//!
//! Only the cell count of each present shape is considered: a region is
//! feasible when the presents it must hold cover no more cells than it has.

use std::io::Write;

use anyhow::{bail, ensure, Context, Result};
use bitvec::prelude::*;
use tracing::debug;

use crate::answer::Answer;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Shape {
    cells: BitVec,
}

impl Shape {
    /// A shape block: a header line such as `0:` followed by `#`/`.` rows.
    fn parse(block: &str) -> Result<Self> {
        let mut lines = block.lines();
        let header = lines.next().unwrap_or_default();
        ensure!(header.trim_end().ends_with(':'), "shape header {:?} does not end with ':'", header);
        let cells = lines.flat_map(|line| line.trim().bytes()).map(|b| match b {
            b'#' => Ok(true),
            b'.' => Ok(false),
            _ => bail!("unexpected shape cell {:?} in block {:?}", b as char, header),
        }).collect::<Result<BitVec>>()?;
        Ok(Shape { cells })
    }

    fn size(&self) -> u64 {
        self.cells.count_ones() as u64
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Region {
    width: u64,
    height: u64,
    counts: Vec<u64>,
}

impl Region {
    /// A line such as `12x5: 1 0 1 0 2 2`.
    fn parse(line: &str) -> Result<Self> {
        let (dims, counts) = line.split_once(':')
            .with_context(|| format!("region {:?} is not of the form WxH: counts", line))?;
        let (width, height) = dims.trim().split_once('x')
            .with_context(|| format!("bad dimensions in region {:?}", line))?;
        let counts = counts.split_whitespace()
            .map(|n| n.parse().with_context(|| format!("bad count {:?} in region {:?}", n, line)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Region {
            width: width.parse().with_context(|| format!("bad width in region {:?}", line))?,
            height: height.parse().with_context(|| format!("bad height in region {:?}", line))?,
            counts,
        })
    }

    /// Cells the required presents occupy.
    fn occupied(&self, shapes: &[Shape]) -> Result<u64> {
        ensure!(self.counts.len() <= shapes.len(),
            "region {}x{} lists {} counts for {} shapes",
            self.width, self.height, self.counts.len(), shapes.len());
        self.counts.iter().zip(shapes)
            .try_fold(0u64, |total, (count, shape)| {
                count.checked_mul(shape.size())?.checked_add(total)
            })
            .with_context(|| format!("presents for region {}x{} overflow", self.width, self.height))
    }

    fn area(&self) -> Result<u64> {
        self.width.checked_mul(self.height)
            .with_context(|| format!("region {}x{} is too large", self.width, self.height))
    }
}

pub fn solve(input: &str, trace: &mut dyn Write) -> Result<Answer> {
    let input = input.replace('\r', "");
    let blocks = input.trim().split("\n\n").collect::<Vec<_>>();
    let Some((regions, shapes)) = blocks.split_last() else {bail!("empty input")};
    let shapes = shapes.iter().map(|block| Shape::parse(block)).collect::<Result<Vec<_>>>()?;
    let regions = regions.lines().map(Region::parse).collect::<Result<Vec<_>>>()?;
    debug!(shapes = shapes.len(), regions = regions.len(), "parsed presents");

    let mut feasible = 0u64;
    for region in &regions {
        let occupied = region.occupied(&shapes)?;
        let available = region.area()?;
        writeln!(trace, "{}x{}: occupied={} available={}", region.width, region.height, occupied, available)?;
        if occupied <= available {
            feasible += 1;
        }
    }

    Ok(Answer::single(feasible.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    const INPUT: &str = "\
0:
###
##.
##.

1:
###
.#.
###

4x4: 2 0
4x4: 1 1
3x3: 0 2
5x3: 0 2
";

    #[test]
    fn counts_shape_cells() {
        let shape = Shape::parse("0:\n###\n##.\n##.").unwrap();
        assert_eq!(shape.size(), 7);
        assert_eq!(shape.cells.len(), 9);
    }

    #[test]
    fn feasibility_by_area() {
        // 14 <= 16, 14 <= 16, 14 > 9, 14 <= 15
        assert_eq!(solve(INPUT, &mut io::sink()).unwrap(), Answer::single(3));
    }

    #[test]
    fn region_parsing() {
        assert_eq!(
            Region::parse("12x5: 1 0 1 0 2 2").unwrap(),
            Region { width: 12, height: 5, counts: vec![1, 0, 1, 0, 2, 2] }
        );
        assert!(Region::parse("12*5: 1").is_err());
        assert!(Region::parse("12x5 1 0").is_err());
        assert!(Region::parse("12x5: 1 a").is_err());
    }

    #[test]
    fn too_many_counts_is_an_error() {
        assert!(solve("0:\n#\n\n2x2: 1 1\n", &mut io::sink()).is_err());
    }

    #[test]
    fn bad_shape_cell_is_an_error() {
        assert!(solve("0:\n#x\n\n2x2: 1\n", &mut io::sink()).is_err());
    }

    #[test]
    fn oversized_region_is_an_error() {
        let huge = format!("0:\n#\n\n{}x{}: 1\n", u64::MAX, 2);
        let err = solve(&huge, &mut io::sink()).unwrap_err();
        assert!(err.to_string().contains("too large"));
        let many = format!("0:\n###\n\n2x2: {}\n", u64::MAX);
        assert!(solve(&many, &mut io::sink()).is_err());
    }

    #[test]
    fn trace_lists_every_region() {
        let mut trace = Vec::new();
        solve(INPUT, &mut trace).unwrap();
        assert_eq!(String::from_utf8(trace).unwrap(), "\
4x4: occupied=14 available=16
4x4: occupied=14 available=16
3x3: occupied=14 available=9
5x3: occupied=14 available=15
");
    }

    #[test]
    fn crlf_input() {
        let crlf = INPUT.replace('\n', "\r\n");
        assert_eq!(solve(&crlf, &mut io::sink()).unwrap(), Answer::single(3));
    }
}
