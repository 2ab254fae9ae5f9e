//! Configuration resolution from CLI args and environment

use crate::cli::{Args, ParallelizeBy};
use std::path::{Path, PathBuf};

/// Environment variable overriding the default input directory
pub const INPUT_DIR_ENV: &str = "AOC_INPUT_DIR";

const DEFAULT_INPUT_DIR: &str = "~/.cache/aoc_solver";

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub year_filter: Option<u16>,
    pub day_filter: Option<u8>,
    pub part_filter: Option<u8>,
    /// A solver must carry all of these
    pub tags: Vec<String>,
    pub input_dir: PathBuf,
    /// Single-solver input override; `-` is stdin
    pub input_file: Option<PathBuf>,
    pub thread_count: usize,
    pub parallelize_by: ParallelizeBy,
    pub quiet: bool,
    pub verbose: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        Self::resolve(args, std::env::var_os(INPUT_DIR_ENV).map(PathBuf::from))
    }

    /// `--input-dir` wins over `env_input_dir`, which wins over the default.
    fn resolve(args: Args, env_input_dir: Option<PathBuf>) -> Self {
        let input_dir = args
            .input_dir
            .or(env_input_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR));

        Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_tilde(&input_dir),
            input_file: args.input,
            thread_count: args.threads.filter(|&n| n > 0).unwrap_or_else(num_cpus),
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
            verbose: args.verbose,
        }
    }
}

/// Expand a leading `~` to the home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
