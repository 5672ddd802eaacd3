//! Day 6: the cephalopod math worksheet.
//!
//! Rows of numbers sit above a row of operators. Part one reads each
//! whitespace-separated column as a problem; part two reads the sheet
//! right-to-left, one character column per number.

use std::io::Write;

use anyhow::{bail, ensure, Context, Result};
use itertools::Itertools;
use tracing::debug;

use crate::answer::Answer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Mul,
}

impl Op {
    fn from_byte(b: u8) -> Option<Op> {
        match b {
            b'+' => Some(Op::Add),
            b'*' => Some(Op::Mul),
            _ => None,
        }
    }

    /// `None` when the result does not fit in a `u64`.
    fn apply(self, values: impl IntoIterator<Item = u64>) -> Option<u64> {
        let mut values = values.into_iter();
        match self {
            Op::Add => values.try_fold(0u64, u64::checked_add),
            Op::Mul => values.try_fold(1u64, u64::checked_mul),
        }
    }

    fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Mul => '*',
        }
    }
}

pub fn solve(input: &str, trace: &mut dyn Write) -> Result<Answer> {
    let lines = input.lines().filter(|line| !line.trim().is_empty()).collect::<Vec<_>>();
    let Some((ops_line, rows)) = lines.split_last() else {bail!("empty worksheet")};
    ensure!(!rows.is_empty(), "worksheet has no number rows");
    debug!(rows = rows.len(), "parsed worksheet");

    Ok(Answer::both(by_rows(rows, ops_line)?.into(), by_columns(&lines, trace)?.into()))
}

fn by_rows(rows: &[&str], ops_line: &str) -> Result<u64> {
    let ops = ops_line.split_whitespace().map(|op| match op.as_bytes() {
        &[b] => Op::from_byte(b).with_context(|| format!("unknown operator {:?}", op)),
        _ => bail!("unknown operator {:?}", op),
    }).collect::<Result<Vec<_>>>()?;

    let rows = rows.iter().map(|row| {
        let values = row.split_whitespace()
            .map(|n| n.parse::<u64>().with_context(|| format!("bad number {:?}", n)))
            .collect::<Result<Vec<_>>>()?;
        ensure!(values.len() == ops.len(),
            "row {:?} has {} numbers but there are {} operators", row, values.len(), ops.len());
        Ok(values)
    }).collect::<Result<Vec<_>>>()?;

    ops.iter().enumerate().try_fold(0u64, |total, (ci, op)| {
        op.apply(rows.iter().map(|row| row[ci]))
            .and_then(|result| total.checked_add(result))
            .with_context(|| format!("column {} overflows", ci))
    })
}

fn by_columns(lines: &[&str], trace: &mut dyn Write) -> Result<u64> {
    let width = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let mut values = Vec::new();
    let mut total = 0u64;

    for ci in (0 .. width).rev() {
        // short lines count as padded with spaces
        let column = lines.iter()
            .map(|line| line.as_bytes().get(ci).copied().unwrap_or(b' ') as char)
            .collect::<String>();
        let column = column.trim();
        let Some(&last) = column.as_bytes().last() else {
            ensure!(values.is_empty(), "blank column {} splits a problem", ci);
            continue;
        };

        let (digits, op) = match Op::from_byte(last) {
            Some(op) => (column[.. column.len() - 1].trim(), Some(op)),
            None => (column, None),
        };
        values.push(digits.parse::<u64>()
            .with_context(|| format!("bad number {:?} in column {}", digits, ci))?);

        if let Some(op) = op {
            let result = op.apply(values.iter().copied())
                .with_context(|| format!("problem ending at column {} overflows", ci))?;
            writeln!(trace, "[{}] {} => {}", values.iter().join(", "), op.symbol(), result)?;
            total = total.checked_add(result).context("worksheet total overflows")?;
            values.clear();
        }
    }
    ensure!(values.is_empty(), "numbers {:?} have no operator", values);

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    const EXAMPLE: &str = "\
123 328  51 64
 45 64  387 23
  6 98  215 314
*   +   *   +
";

    #[test]
    fn example() {
        assert_eq!(solve(EXAMPLE, &mut io::sink()).unwrap(), Answer::both(4277556, 3263827));
    }

    #[test]
    fn tolerates_crlf_line_endings() {
        let crlf = EXAMPLE.replace('\n', "\r\n");
        assert_eq!(solve(&crlf, &mut io::sink()).unwrap(), Answer::both(4277556, 3263827));
    }

    #[test]
    fn single_problem() {
        let sheet = "12\n 3\n+ \n";
        // rows: 12 + 3; columns right-to-left: "23", then "1+"
        assert_eq!(solve(sheet, &mut io::sink()).unwrap(), Answer::both(15, 24));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(solve("1 2\n3\n+ *\n", &mut io::sink()).is_err());
    }

    #[test]
    fn unknown_operator_is_rejected() {
        assert!(solve("1 2\n3 4\n+ -\n", &mut io::sink()).is_err());
    }

    #[test]
    fn missing_operator_is_rejected() {
        assert!(by_columns(&["12", "34"], &mut io::sink()).is_err());
    }

    #[test]
    fn overflow_is_an_error() {
        let big = u64::MAX.to_string();
        assert!(solve(&format!("{} 2\n{} 3\n+ *\n", big, big), &mut io::sink()).is_err());
        assert!(solve(&format!("{}\n2\n*\n", big), &mut io::sink()).is_err());
    }

    #[test]
    fn trace_shows_each_column_problem() {
        let mut trace = Vec::new();
        solve("12\n 3\n+ \n", &mut trace).unwrap();
        assert_eq!(String::from_utf8(trace).unwrap(), "[23, 1] + => 24\n");
    }

    #[test]
    fn empty_sheet_is_rejected() {
        assert!(solve("", &mut io::sink()).is_err());
        assert!(solve("+ *\n", &mut io::sink()).is_err());
    }
}
