//! Day 10: factory machines.
//!
//! A machine line reads `[.##.] (3) (1,3) (2) {3,5,4,7}`: the indicator
//! light pattern, the buttons with the counters each one touches, and the
//! joltage targets. Part one finds the fewest presses that toggle the lights
//! into the pattern; part two the fewest that raise every counter exactly to
//! its target.

use std::io::Write;

use anyhow::{bail, ensure, Context, Result};
use regex::Regex;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::answer::Answer;

const MAX_LIGHTS: usize = 32;
/// `[lights]`, `(button)` or `{joltages}`.
const TOKEN: &str = r"\[([^\]]*)\]|\(([^)]*)\)|\{([^}]*)\}";
/// Button subsets are enumerated, so this bounds the work per machine.
const MAX_BUTTONS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Machine {
    lights: usize,
    target: u32,
    buttons: Vec<u32>,
    joltages: Vec<u32>,
}

fn numbers(list: &str) -> Result<Vec<u32>> {
    list.split(',')
        .map(|n| n.trim().parse().with_context(|| format!("bad number {:?} in {:?}", n, list)))
        .collect()
}

impl Machine {
    fn parse(line: &str, token: &Regex) -> Result<Self> {
        let mut pattern = None;
        let mut buttons = Vec::new();
        let mut joltages = None;
        for m in token.captures_iter(line) {
            if let Some(lights) = m.get(1) {
                ensure!(pattern.is_none(), "machine {:?} has two light patterns", line);
                pattern = Some(lights.as_str());
            } else if let Some(counters) = m.get(2) {
                let mask = numbers(counters.as_str())?.into_iter().try_fold(0u32, |mask, i| {
                    ensure!((i as usize) < MAX_LIGHTS, "button counter {} out of range in {:?}", i, line);
                    Ok(mask | 1 << i)
                })?;
                buttons.push(mask);
            } else if let Some(targets) = m.get(3) {
                joltages = Some(numbers(targets.as_str())?);
            }
        }
        let Some(pattern) = pattern else {bail!("machine {:?} has no light pattern", line)};
        let Some(joltages) = joltages else {bail!("machine {:?} has no joltages", line)};
        let lights = pattern.len();
        ensure!(lights <= MAX_LIGHTS, "machine {:?} has more than {} lights", line, MAX_LIGHTS);
        ensure!(buttons.len() <= MAX_BUTTONS, "machine {:?} has more than {} buttons", line, MAX_BUTTONS);
        ensure!(joltages.len() == lights,
            "machine {:?} has {} lights but {} joltages", line, lights, joltages.len());
        ensure!(pattern.bytes().all(|b| b == b'.' || b == b'#'), "bad light pattern in {:?}", line);
        ensure!(buttons.iter().all(|&b| b.checked_shr(lights as u32).unwrap_or(0) == 0),
            "machine {:?} has a button past its last light", line);
        let target = pattern.bytes().enumerate().fold(0, |target, (i, b)| {
            if b == b'#' {target | 1 << i} else {target}
        });
        Ok(Machine { lights, target, buttons, joltages })
    }

    fn subsets(&self) -> impl Iterator<Item = u32> {
        0 .. 1u32 << self.buttons.len()
    }

    /// XOR of the toggles of the buttons in `subset`.
    fn toggled(&self, subset: u32) -> u32 {
        self.pressed(subset).fold(0, |lights, b| lights ^ b)
    }

    fn pressed(&self, subset: u32) -> impl Iterator<Item = u32> + '_ {
        self.buttons.iter().enumerate()
            .filter(move |&(bi, _)| subset >> bi & 1 == 1)
            .map(|(_, &b)| b)
    }

    fn fewest_for_lights(&self) -> Result<u64> {
        self.subsets()
            .filter(|&subset| self.toggled(subset) == self.target)
            .map(|subset| u64::from(subset.count_ones()))
            .min()
            .with_context(|| format!("no presses light {:#b}", self.target))
    }

    /// Pressing a set of buttons once each adds their effect; what remains
    /// must be even on every counter, so it is halved and solved again with
    /// each press counted twice.
    fn fewest_for_joltage(&self) -> Result<u64> {
        let mut by_parity: FxHashMap<u32, Vec<(u64, Vec<u32>)>> = FxHashMap::default();
        for subset in self.subsets() {
            let mut effect = vec![0; self.lights];
            for b in self.pressed(subset) {
                for (i, e) in effect.iter_mut().enumerate() {
                    *e += b >> i & 1;
                }
            }
            by_parity.entry(self.toggled(subset))
                .or_default()
                .push((u64::from(subset.count_ones()), effect));
        }
        let mut memo = FxHashMap::default();
        fewest_presses(&self.joltages, &by_parity, &mut memo)
            .with_context(|| format!("no presses reach joltages {:?}", self.joltages))
    }
}

fn fewest_presses(
    joltages: &[u32],
    by_parity: &FxHashMap<u32, Vec<(u64, Vec<u32>)>>,
    memo: &mut FxHashMap<Vec<u32>, Option<u64>>,
) -> Option<u64> {
    if joltages.iter().all(|&j| j == 0) {
        return Some(0);
    }
    if let Some(&known) = memo.get(joltages) {
        return known;
    }
    let parity = joltages.iter().enumerate().fold(0, |p, (i, &j)| p | (j & 1) << i);
    let mut best: Option<u64> = None;
    for (presses, effect) in by_parity.get(&parity).map_or(&[][..], Vec::as_slice) {
        if effect.iter().zip(joltages).any(|(e, j)| e > j) {
            continue;
        }
        let half = joltages.iter().zip(effect).map(|(j, e)| (j - e) / 2).collect::<Vec<_>>();
        if let Some(rest) = fewest_presses(&half, by_parity, memo) {
            let total = presses + 2 * rest;
            best = Some(best.map_or(total, |b| b.min(total)));
        }
    }
    memo.insert(joltages.to_vec(), best);
    best
}

pub fn solve(input: &str, trace: &mut dyn Write) -> Result<Answer> {
    let token = Regex::new(TOKEN)?;
    let machines = input.trim().lines()
        .map(|line| Machine::parse(line, &token))
        .collect::<Result<Vec<_>>>()?;
    debug!(machines = machines.len(), "parsed machines");

    let (mut p1, mut p2) = (0u128, 0u128);
    for (mi, machine) in machines.iter().enumerate() {
        let lights = machine.fewest_for_lights().with_context(|| format!("machine {}", mi + 1))?;
        let joltage = machine.fewest_for_joltage().with_context(|| format!("machine {}", mi + 1))?;
        writeln!(trace, "machine {}: lights={} joltage={}", mi + 1, lights, joltage)?;
        p1 += u128::from(lights);
        p2 += u128::from(joltage);
    }
    Ok(Answer::both(p1, p2))
}
