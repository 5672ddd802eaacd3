//! Day 1: the safe dial.

use std::io::Write;
use std::str::FromStr;

use anyhow::{bail, Context, Error, Result};
use tracing::debug;

use crate::answer::Answer;

const POSITIONS: u64 = 100;
const START: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rotation {
    Left(u64),
    Right(u64),
}

impl FromStr for Rotation {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let (dir, distance) = line.split_at_checked(1)
            .with_context(|| format!("rotation {:?} has no direction", line))?;
        let distance = distance.parse()
            .with_context(|| format!("bad distance in rotation {:?}", line))?;
        match dir {
            "L" => Ok(Rotation::Left(distance)),
            "R" => Ok(Rotation::Right(distance)),
            _ => bail!("unknown direction {:?} in rotation {:?}", dir, line),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Dial {
    position: u64,
    /// Clicks that landed on zero, including the ones passed mid-rotation.
    clicks: u64,
}

impl Dial {
    fn new() -> Self {
        Dial { position: START, clicks: 0 }
    }

    fn turn(&mut self, rotation: Rotation) -> Result<()> {
        // turning left from p is turning right from the mirrored position
        let (from, n) = match rotation {
            Rotation::Right(n) => (self.position, n),
            Rotation::Left(n) => ((POSITIONS - self.position) % POSITIONS, n),
        };
        let end = from.checked_add(n)
            .with_context(|| format!("rotation {:?} overflows the dial", rotation))?;
        self.clicks = self.clicks.checked_add(end / POSITIONS)
            .with_context(|| format!("click count overflows at rotation {:?}", rotation))?;
        self.position = match rotation {
            Rotation::Right(_) => end % POSITIONS,
            Rotation::Left(_) => (POSITIONS - end % POSITIONS) % POSITIONS,
        };
        Ok(())
    }
}

pub fn solve(input: &str, trace: &mut dyn Write) -> Result<Answer> {
    let mut dial = Dial::new();
    let mut rests_on_zero = 0u64;
    for line in input.trim().lines().map(str::trim) {
        let rotation: Rotation = line.parse()?;
        dial.turn(rotation)?;
        if dial.position == 0 {
            rests_on_zero += 1;
        }
        writeln!(trace, "input: {}", line)?;
        writeln!(trace, "dial: position={} clicks={}", dial.position, dial.clicks)?;
    }
    debug!(position = dial.position, clicks = dial.clicks, "dial stopped");

    Ok(Answer::both(rests_on_zero.into(), dial.clicks.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    const EXAMPLE: &str = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n";

    /// Turns the dial one click at a time.
    fn simulate(position: u64, rotation: Rotation) -> Dial {
        let mut dial = Dial { position, clicks: 0 };
        let (steps, delta) = match rotation {
            Rotation::Left(n) => (n, POSITIONS - 1),
            Rotation::Right(n) => (n, 1),
        };
        for _ in 0 .. steps {
            dial.position = (dial.position + delta) % POSITIONS;
            if dial.position == 0 {
                dial.clicks += 1;
            }
        }
        dial
    }

    #[test]
    fn parses_rotations() {
        assert_eq!("L68".parse::<Rotation>().unwrap(), Rotation::Left(68));
        assert_eq!("R0".parse::<Rotation>().unwrap(), Rotation::Right(0));
        assert!("".parse::<Rotation>().is_err());
        assert!("X5".parse::<Rotation>().is_err());
        assert!("L".parse::<Rotation>().is_err());
        assert!("R-3".parse::<Rotation>().is_err());
    }

    #[test]
    fn closed_form_matches_click_simulation() {
        for position in 0 .. POSITIONS {
            for n in [0, 1, 5, 49, 50, 99, 100, 101, 250, 1000] {
                for rotation in [Rotation::Left(n), Rotation::Right(n)] {
                    let mut dial = Dial { position, clicks: 0 };
                    dial.turn(rotation).unwrap();
                    assert_eq!(dial, simulate(position, rotation), "{:?} from {}", rotation, position);
                }
            }
        }
    }

    #[test]
    fn long_rotation_passes_zero_many_times() {
        let mut dial = Dial::new();
        dial.turn(Rotation::Right(1000)).unwrap();
        assert_eq!(dial, Dial { position: 50, clicks: 10 });
    }

    #[test]
    fn huge_rotation_is_an_error() {
        let mut dial = Dial::new();
        assert!(dial.turn(Rotation::Right(u64::MAX)).is_err());
        assert!(dial.turn(Rotation::Left(u64::MAX)).is_err());
        assert!(solve(&format!("R{}\n", u64::MAX), &mut io::sink()).is_err());
    }

    #[test]
    fn trace_follows_each_rotation() {
        let mut trace = Vec::new();
        solve("L68\nR18\n", &mut trace).unwrap();
        assert_eq!(
            String::from_utf8(trace).unwrap(),
            "input: L68\ndial: position=82 clicks=1\ninput: R18\ndial: position=0 clicks=2\n"
        );
    }

    #[test]
    fn example() {
        assert_eq!(solve(EXAMPLE, &mut io::sink()).unwrap(), Answer::both(3, 6));
    }

    #[test]
    fn tolerates_crlf_line_endings() {
        let crlf = EXAMPLE.replace('\n', "\r\n");
        assert_eq!(solve(&crlf, &mut io::sink()).unwrap(), Answer::both(3, 6));
    }

    #[test]
    fn bad_line_is_an_error() {
        assert!(solve("L10\nU3\n", &mut io::sink()).is_err());
    }
}
