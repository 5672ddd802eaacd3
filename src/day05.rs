//! Day 5: fresh ingredient ranges.
//!
//! The input lists inclusive `a-b` ranges of fresh ids, a blank line, then
//! the ids on hand. Part one counts the fresh ids on hand; part two counts
//! every id any range covers.

use std::io::Write;
use std::ops::RangeInclusive;

use anyhow::{bail, ensure, Context, Result};
use tracing::debug;

use crate::answer::Answer;

fn parse_range(line: &str) -> Result<RangeInclusive<u64>> {
    let Some((a, b)) = line.split_once('-') else {bail!("range {:?} is not of the form a-b", line)};
    let a: u64 = a.trim().parse().with_context(|| format!("bad start in range {:?}", line))?;
    let b: u64 = b.trim().parse().with_context(|| format!("bad end in range {:?}", line))?;
    ensure!(a <= b, "range {:?} ends before it starts", line);
    Ok(a ..= b)
}

/// Sorted, disjoint ranges covering the same ids as `ranges`. Ranges that
/// touch without overlapping stay separate.
pub fn merge(mut ranges: Vec<RangeInclusive<u64>>) -> Vec<RangeInclusive<u64>> {
    ranges.sort_by_key(|r| *r.start());
    let mut merged: Vec<RangeInclusive<u64>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start() <= last.end() => {
                if range.end() > last.end() {
                    *last = *last.start() ..= *range.end();
                }
            }
            _ => merged.push(range),
        }
    }
    merged
}

pub fn solve(input: &str, trace: &mut dyn Write) -> Result<Answer> {
    let input = input.replace('\r', "");
    let (ranges, ids) = input.trim().split_once("\n\n").unwrap_or((input.trim(), ""));
    let ranges = ranges.lines().map(|line| parse_range(line.trim())).collect::<Result<Vec<_>>>()?;
    let ids = ids.split_whitespace()
        .map(|id| id.parse::<u64>().with_context(|| format!("bad ingredient id {:?}", id)))
        .collect::<Result<Vec<_>>>()?;
    debug!(ranges = ranges.len(), ids = ids.len(), "parsed inventory");

    let fresh = ids.iter().filter(|&&id| ranges.iter().any(|r| r.contains(&id))).count();

    let mut covered = 0u128;
    for range in merge(ranges) {
        writeln!(trace, "merged: {}-{}", range.start(), range.end())?;
        covered += u128::from(range.end() - range.start()) + 1;
    }

    Ok(Answer::both(fresh as u128, covered))
}
