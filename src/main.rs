//! Advent of Code 2025 puzzle solvers.
//!
//! `aoc2025 solve <day> [input]` prints the answers for one day;
//! `aoc2025 preview [input]` renders the day 9 floor as an SVG.

mod answer;
mod day01;
mod day02;
mod day03;
mod day04;
mod day05;
mod day06;
mod day07;
mod day08;
mod day09;
mod day10;
mod day11;
mod day12;
mod logging;
mod preview;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::answer::Answer;
use crate::day09::Polygon;

/// Solves one day's input, writing intermediate values to the trace.
type Solver = fn(&str, &mut dyn Write) -> Result<Answer>;

const DAYS: [(u8, Solver); 12] = [
    (1, day01::solve),
    (2, day02::solve),
    (3, day03::solve),
    (4, day04::solve),
    (5, day05::solve),
    (6, day06::solve),
    (7, day07::solve),
    (8, day08::solve),
    (9, day09::solve),
    (10, day10::solve),
    (11, day11::solve),
    (12, day12::solve),
];

#[derive(Parser)]
#[command(name = "aoc2025", version, about = "Advent of Code 2025 puzzle solvers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve one day's puzzle and print `p1:`/`p2:` answers.
    Solve {
        /// Day number.
        day: u8,
        /// Puzzle input file.
        #[arg(default_value = "sample.txt")]
        input: PathBuf,
        /// Also print intermediate values as they are found.
        #[arg(short, long)]
        verbose: bool,
    },
    /// Render the day 9 tile polygon as an SVG file.
    Preview {
        /// Day 9 puzzle input file.
        #[arg(default_value = "input.txt")]
        input: PathBuf,
        /// Text naming two opposite rectangle corners, e.g. "9,5 2,3".
        #[arg(long)]
        solution: Option<String>,
        /// Input coordinates are divided by this.
        #[arg(long, default_value_t = preview::DEFAULT_SCALE)]
        scale: f64,
        /// Where to write the SVG.
        #[arg(short, long, default_value = "preview.svg")]
        output: PathBuf,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Solve { day, input, verbose } => cmd_solve(day, &input, verbose),
        Command::Preview { input, solution, scale, output } => {
            cmd_preview(&input, solution.as_deref(), scale, &output)
        }
    }
}

fn solver(day: u8) -> Result<Solver> {
    DAYS.iter()
        .find(|&&(d, _)| d == day)
        .map(|&(_, solve)| solve)
        .with_context(|| format!(
            "no solver for day {}, available days: {:?}",
            day,
            DAYS.map(|(d, _)| d),
        ))
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

fn cmd_solve(day: u8, input: &Path, verbose: bool) -> Result<()> {
    let solve = solver(day)?;
    let text = read_input(input)?;
    let mut stdout = io::stdout().lock();
    let mut sink = io::sink();
    let trace: &mut dyn Write = if verbose {&mut stdout} else {&mut sink};
    let time = Instant::now();
    let answer = solve(&text, trace).with_context(|| format!("solve day {}", day))?;
    writeln!(stdout, "{}", answer)?;
    info!(day, elapsed_secs = time.elapsed().as_secs_f32(), "solved");
    Ok(())
}

fn cmd_preview(input: &Path, solution: Option<&str>, scale: f64, output: &Path) -> Result<()> {
    let polygon = Polygon::parse(&read_input(input)?)
        .with_context(|| format!("parse polygon from {}", input.display()))?;
    let solution = solution.map(preview::parse_solution).transpose()?;
    let svg = preview::render(polygon.points(), solution, scale)?;
    fs::write(output, svg).with_context(|| format!("write {}", output.display()))?;
    info!(path = %output.display(), "wrote preview");
    Ok(())
}
