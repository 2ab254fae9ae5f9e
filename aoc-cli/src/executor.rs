//! Runs registered solvers over the thread pool

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use aoc_solver::{DynSolver, SolverError, SolverRegistry};
use chrono::TimeDelta;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;
use tracing::debug;

/// Outcome of one year/day/part
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    /// `None` when the input never reached the parser
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// A registered solver selected by the filters, with the parts to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    thread_pool: rayon::ThreadPool,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
    tags: Vec<String>,
}

impl Executor {
    pub fn new(
        registry: SolverRegistry,
        inputs: InputStore,
        config: &Config,
    ) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            registry,
            inputs,
            thread_pool,
            parallelize_by: config.parallelize_by,
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
            tags: config.tags.clone(),
        })
    }

    pub fn inputs(&self) -> &InputStore {
        &self.inputs
    }

    /// Registered solvers matching the year, day, tag and part filters,
    /// ordered by year then day
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .filter(|info| self.tags.iter().all(|tag| info.tags.contains(&tag.as_str())))
            .filter_map(|info| {
                Some(WorkItem {
                    year: info.year,
                    day: info.day,
                    parts: self.filter_parts(info.parts)?,
                })
            })
            .collect()
    }

    fn filter_parts(&self, max_parts: u8) -> Option<RangeInclusive<u8>> {
        match self.part_filter {
            Some(p) if (1..=max_parts).contains(&p) => Some(p..=p),
            Some(_) => None,
            None if max_parts > 0 => Some(1..=max_parts),
            None => None,
        }
    }

    /// Run every work item, sending one result per part to `tx`.
    ///
    /// Solver failures travel as error results; only failures of the
    /// executor itself are returned.
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        debug!(
            solvers = work_items.len(),
            mode = ?self.parallelize_by,
            "executing work items"
        );

        let collected_error = match self.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error = None;
                for work in &work_items {
                    if let Err(e) = self.run_work(work, &tx) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error
            }
            ParallelizeBy::Day | ParallelizeBy::Part => self.thread_pool.install(|| {
                work_items
                    .par_iter()
                    .map(|work| self.run_work(work, &tx).err())
                    .reduce_with(|err1, err2| match (err1, err2) {
                        (Some(err1), Some(err2)) => Some(ArcExecutorError::combine(err1, err2)),
                        (err1, err2) => err1.or(err2),
                    })
                    .flatten()
            }),
        };

        collected_error.map_or(Ok(()), Err)
    }

    fn run_work(&self, work: &WorkItem, tx: &Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let input = match self.inputs.get(work.year, work.day) {
            Ok(input) => input,
            Err(e) => {
                debug!(year = work.year, day = work.day, error = %e, "input unavailable");
                return self.fail_all_parts(work, ExecutorError::from(e).into(), None, tx);
            }
        };

        if self.parallelize_by == ParallelizeBy::Part {
            work.parts
                .clone()
                .into_par_iter()
                .try_for_each(|part| self.run_parts(work, &input, part..=part, tx))
        } else {
            self.run_parts(work, &input, work.parts.clone(), tx)
        }
    }

    /// Parse once, then solve `parts` in order on the current thread
    fn run_parts(
        &self,
        work: &WorkItem,
        input: &str,
        parts: RangeInclusive<u8>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let mut solver = match self.registry.create_solver(work.year, work.day, input) {
            Ok(solver) => solver,
            Err(e) => {
                let item = WorkItem {
                    year: work.year,
                    day: work.day,
                    parts,
                };
                return self.fail_all_parts(&item, ExecutorError::from(e).into(), Some(TimeDelta::zero()), tx);
            }
        };

        for part in parts {
            send(tx, solve_part(part, &mut *solver))?;
        }
        Ok(())
    }

    fn fail_all_parts(
        &self,
        work: &WorkItem,
        error: ArcExecutorError,
        parse_duration: Option<TimeDelta>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        for part in work.parts.clone() {
            send(
                tx,
                SolverResult {
                    year: work.year,
                    day: work.day,
                    part,
                    answer: Err(error.clone()),
                    parse_duration,
                    solve_duration: TimeDelta::zero(),
                },
            )?;
        }
        Ok(())
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ExecutorError::ChannelSend.into())
}

fn solve_part(part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    let (answer, solve_duration) = match solver.solve(part) {
        Ok(solved) => {
            let duration = solved.duration();
            (Ok(solved.answer), duration)
        }
        Err(e) => (
            Err(ExecutorError::Solver(SolverError::from(e)).into()),
            TimeDelta::zero(),
        ),
    };

    SolverResult {
        year: solver.year(),
        day: solver.day(),
        part,
        answer,
        parse_duration: Some(solver.parse_duration()),
        solve_duration,
    }
}
