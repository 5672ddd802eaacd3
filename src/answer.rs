use std::fmt;

/// Puzzle answers for one run: part one always, part two when the day has one.
///
/// Wide enough to hold a sum of many `u64` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer {
    pub p1: u128,
    pub p2: Option<u128>,
}

impl Answer {
    pub fn both(p1: u128, p2: u128) -> Self {
        Self { p1, p2: Some(p2) }
    }

    pub fn single(p1: u128) -> Self {
        Self { p1, p2: None }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p1: {}", self.p1)?;
        if let Some(p2) = self.p2 {
            write!(f, "\np2: {}", p2)?;
        }
        Ok(())
    }
}
