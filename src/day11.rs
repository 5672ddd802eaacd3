//! Day 11: reactor device paths.
//!
//! Each line `aaa: bbb ccc` lists the devices `aaa` feeds. Part one counts
//! the paths from `you` to `out`; part two counts the paths from `svr` to
//! `out` that pass through both `fft` and `dac`.

use std::io::Write;

use anyhow::{bail, ensure, Context, Result};
use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::answer::Answer;

const OUT: &str = "out";

struct Devices<'a> {
    outputs: FxHashMap<&'a str, Vec<&'a str>>,
}

impl<'a> Devices<'a> {
    fn parse(input: &'a str) -> Result<Self> {
        let mut outputs = FxHashMap::default();
        for line in input.trim().lines() {
            let Some((device, targets)) = line.split_once(':') else {
                bail!("device line {:?} is not of the form name: outputs", line)
            };
            let device = device.trim();
            ensure!(!device.is_empty(), "device line {:?} has no name", line);
            let targets = targets.split_whitespace().unique().collect::<Vec<_>>();
            ensure!(outputs.insert(device, targets).is_none(), "device {:?} is listed twice", device);
        }
        Ok(Devices { outputs })
    }

    /// Paths from `from` to `out` that pass through every device in `via`.
    fn paths(&self, from: &'a str, via: &[&str]) -> Result<u128> {
        ensure!(via.len() < 8, "at most 7 required devices, got {}", via.len());
        let mut walk = Walk { devices: self, via, memo: FxHashMap::default(), on_path: FxHashSet::default() };
        walk.count(from, 0)
    }
}

struct Walk<'d, 'a> {
    devices: &'d Devices<'a>,
    via: &'d [&'d str],
    /// (device, required devices seen so far) -> paths to `out`
    memo: FxHashMap<(&'a str, u8), u128>,
    on_path: FxHashSet<&'a str>,
}

impl<'d, 'a> Walk<'d, 'a> {
    fn count(&mut self, device: &'a str, seen: u8) -> Result<u128> {
        let seen = self.via.iter().enumerate()
            .filter(|&(_, &v)| v == device)
            .fold(seen, |seen, (i, _)| seen | 1 << i);
        if device == OUT {
            let all = (1u8 << self.via.len()) - 1;
            return Ok(u128::from(seen == all));
        }
        if let Some(&known) = self.memo.get(&(device, seen)) {
            return Ok(known);
        }
        ensure!(self.on_path.insert(device), "devices loop back through {:?}", device);
        let mut total = 0u128;
        let devices = self.devices;
        for &next in devices.outputs.get(device).map_or(&[][..], Vec::as_slice) {
            let paths = self.count(next, seen)?;
            total = total.checked_add(paths)
                .with_context(|| format!("path count through {:?} overflows", device))?;
        }
        self.on_path.remove(device);
        self.memo.insert((device, seen), total);
        Ok(total)
    }
}

pub fn solve(input: &str, trace: &mut dyn Write) -> Result<Answer> {
    let devices = Devices::parse(input)?;
    debug!(devices = devices.outputs.len(), "parsed devices");

    let p1 = devices.paths("you", &[])?;
    writeln!(trace, "you -> out: {}", p1)?;
    let p2 = devices.paths("svr", &["fft", "dac"])?;
    writeln!(trace, "svr -> fft, dac -> out: {}", p2)?;
    Ok(Answer::both(p1, p2))
}
