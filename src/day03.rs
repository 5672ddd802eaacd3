//! Day 3: battery banks.
//!
//! Each line is a bank of single-digit batteries. Turning on `n` of them, in
//! order, reads as an `n`-digit number; each part sums the largest such number
//! per bank.

use std::io::Write;

use anyhow::{bail, ensure, Context, Result};
use tracing::debug;

use crate::answer::Answer;

/// The largest number made of `n` digits of `bank`, keeping their order.
///
/// Each digit is the leftmost maximum among the positions that still leave
/// room for the digits after it.
pub fn max_joltage(bank: &[u8], n: usize) -> Result<u64> {
    ensure!(bank.len() >= n, "bank of {} batteries cannot turn on {}", bank.len(), n);
    let mut start = 0;
    let mut joltage = 0u64;
    for left in (0 .. n).rev() {
        let window = &bank[start .. bank.len() - left];
        let (offset, &digit) = window.iter().enumerate()
            .rev()
            .max_by_key(|&(_, &d)| d)
            .context("empty battery window")?;
        start += offset + 1;
        joltage = joltage.checked_mul(10)
            .and_then(|j| j.checked_add(u64::from(digit)))
            .with_context(|| format!("{} digits overflow", n))?;
    }
    Ok(joltage)
}

fn parse_bank(line: &str) -> Result<Vec<u8>> {
    line.bytes().map(|b| match b {
        b'0' ..= b'9' => Ok(b - b'0'),
        _ => bail!("unexpected battery {:?} in bank {:?}", b as char, line),
    }).collect()
}

pub fn solve(input: &str, trace: &mut dyn Write) -> Result<Answer> {
    let banks = input.trim().lines()
        .map(|line| parse_bank(line.trim()))
        .collect::<Result<Vec<_>>>()?;
    debug!(banks = banks.len(), "parsed banks");

    let (mut p1, mut p2) = (0u128, 0u128);
    for bank in &banks {
        let two = max_joltage(bank, 2)?;
        let twelve = max_joltage(bank, 12)?;
        writeln!(trace, "bank: 2 => {} 12 => {}", two, twelve)?;
        p1 += u128::from(two);
        p2 += u128::from(twelve);
    }
    Ok(Answer::both(p1, p2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    const EXAMPLE: &str = "\
987654321111111
811111111111119
234234234234278
818181911112111
";

    fn bank(s: &str) -> Vec<u8> {
        parse_bank(s).unwrap()
    }

    #[test]
    fn example() {
        assert_eq!(solve(EXAMPLE, &mut io::sink()).unwrap(), Answer::both(357, 3121910778619));
    }

    #[test]
    fn picks_leftmost_maximum() {
        assert_eq!(max_joltage(&bank("811111111111119"), 2).unwrap(), 89);
        assert_eq!(max_joltage(&bank("818181911112111"), 2).unwrap(), 92);
        assert_eq!(max_joltage(&bank("9919"), 2).unwrap(), 99);
        assert_eq!(max_joltage(&bank("234234234234278"), 12).unwrap(), 434234234278);
    }

    #[test]
    fn short_bank_is_an_error() {
        assert!(max_joltage(&bank("9"), 2).is_err());
        assert!(solve("12345\n", &mut io::sink()).is_err());
        assert!(parse_bank("12a").is_err());
    }

    #[test]
    fn whole_bank() {
        assert_eq!(max_joltage(&bank("120"), 3).unwrap(), 120);
        assert_eq!(max_joltage(&bank("5"), 0).unwrap(), 0);
    }

    #[test]
    fn trace_per_bank() {
        let mut trace = Vec::new();
        solve("987654321111111\n", &mut trace).unwrap();
        assert_eq!(String::from_utf8(trace).unwrap(), "bank: 2 => 98 12 => 987654321111\n");
    }
}
