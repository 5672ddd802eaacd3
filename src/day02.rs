//! Day 2: invalid product IDs.
//!
//! An ID is invalid when its decimal digits are one block repeated `k` times
//! (`1212` is `12` twice, `123123123` is `123` three times). Part one only
//! looks at `k = 2`, part two at every `k` from 2 to 10.

use std::io::Write;
use std::ops::RangeInclusive;

use anyhow::{bail, Context, Result};
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::answer::Answer;

const MAX_BLOCK_COUNT: u32 = 10;

pub fn solve(input: &str, trace: &mut dyn Write) -> Result<Answer> {
    let ranges = parse_ranges(input)?;
    debug!(ranges = ranges.len(), "parsed id ranges");

    let mut by_block2 = FxHashSet::default();
    let mut by_all = FxHashSet::default();
    for &(min, max) in &ranges {
        writeln!(trace, "Range: ({}, {})", min, max)?;
        for k in 2 ..= MAX_BLOCK_COUNT {
            for id in block_repeats(min, max, k)? {
                writeln!(trace, "  - {}", id)?;
                if k == 2 {
                    by_block2.insert(id);
                }
                by_all.insert(id);
            }
        }
    }

    Ok(Answer::both(wide_sum(&by_block2), wide_sum(&by_all)))
}

/// Sum as `u128`: two 20-digit IDs already overflow a `u64`.
fn wide_sum(ids: &FxHashSet<u64>) -> u128 {
    ids.iter().map(|&id| u128::from(id)).sum()
}

fn parse_ranges(input: &str) -> Result<Vec<(u64, u64)>> {
    input.trim().split(',').map(|token| {
        let token = token.trim();
        let (min, max) = token.split_once('-')
            .with_context(|| format!("range {:?} is not of the form min-max", token))?;
        let min = min.parse().with_context(|| format!("bad lower bound in range {:?}", token))?;
        let max = max.parse().with_context(|| format!("bad upper bound in range {:?}", token))?;
        Ok((min, max))
    }).collect()
}

/// Every integer in `min ..= max` whose digits are one block repeated `k` times,
/// in ascending order.
///
/// Only lengths divisible by `k` can qualify, so both bounds are first pulled
/// inwards to the nearest such length. The candidates are then generated from
/// their leading block instead of scanning the range.
pub fn block_repeats(min: u64, max: u64, k: u32) -> Result<BlockRepeats> {
    if k < 2 {
        bail!("block count must be at least 2, got {}", k);
    }
    let empty = BlockRepeats { blocks: 1 ..= 0, k, bounds: min ..= max };

    let mut min_len = digit_len(min);
    let mut low = min;
    if min_len % k != 0 {
        min_len += k - min_len % k;
        let Some(pow) = 10u64.checked_pow(min_len - 1) else {return Ok(empty)};
        low = pow;
    }

    let mut max_len = digit_len(max);
    let mut high = max;
    if max_len % k != 0 {
        max_len -= max_len % k;
        if max_len == 0 {
            return Ok(empty);
        }
        let Some(pow) = 10u64.checked_pow(max_len) else {return Ok(empty)};
        high = pow - 1;
    }

    if low > high {
        return Ok(empty);
    }

    let min_block = leading_digits(low, min_len, min_len / k);
    let max_block = leading_digits(high, max_len, max_len / k);
    Ok(BlockRepeats {
        blocks: min_block.min(max_block) ..= min_block.max(max_block),
        k,
        bounds: min ..= max,
    })
}

/// Lazy, restartable sequence produced by [`block_repeats`].
#[derive(Debug, Clone)]
pub struct BlockRepeats {
    blocks: RangeInclusive<u64>,
    k: u32,
    bounds: RangeInclusive<u64>,
}

impl Iterator for BlockRepeats {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        for block in self.blocks.by_ref() {
            match repeat_block(block, self.k) {
                Some(id) if self.bounds.contains(&id) => return Some(id),
                Some(_) => (),
                // repetitions only grow with the block, so nothing later fits either
                None => break,
            }
        }
        None
    }
}

fn digit_len(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |log| log + 1)
}

/// The first `take` digits of the `len`-digit number `n`.
fn leading_digits(n: u64, len: u32, take: u32) -> u64 {
    n / 10u64.pow(len - take)
}

/// `block` written `k` times in a row, or `None` if that does not fit in a `u64`.
fn repeat_block(block: u64, k: u32) -> Option<u64> {
    let shift = 10u64.checked_pow(digit_len(block))?;
    (0 .. k).try_fold(0u64, |acc, _| acc.checked_mul(shift)?.checked_add(block))
}
