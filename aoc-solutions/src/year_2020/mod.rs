//! 2020 puzzles built on the graph and automaton engines

pub mod day_17;
pub mod day_7;
