//! Command-line arguments

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How work is spread over the thread pool
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// Run every solver and part in order on the calling thread
    Sequential,
    /// One task per year/day; parts of a day run in order
    #[default]
    Day,
    /// One task per year/day/part
    Part,
}

/// Run Advent of Code solvers against local puzzle inputs
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers on local inputs", version)]
pub struct Args {
    /// Year to run (all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Only run solvers carrying every one of these tags (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `{year}_day{day:02}.txt` inputs
    /// [default: $AOC_INPUT_DIR or ~/.cache/aoc_solver]
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Read the input of the single selected solver from FILE (`-` for stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Worker threads for parallel execution [default: available cores]
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level
    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Print answers only
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log engine progress (debug level) to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
