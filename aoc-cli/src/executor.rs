//! Sequential executor for running solvers

use crate::config::Config;
use crate::input::InputStore;
use aoc_solver::{
    FileSource, PhaseError, PhaseObserver, PhaseReport, PuzzleRunner, SolverRegistry,
};
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs every selected work item through the puzzle runner, one after another
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    input_override: Option<PathBuf>,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputStore::new(config.input_dir.clone()),
            input_override: config.input_override.clone(),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// The file a work item reads from
    pub fn input_path(&self, work: &WorkItem) -> PathBuf {
        match &self.input_override {
            Some(path) => path.clone(),
            None => self.inputs.input_path(work.year, work.day),
        }
    }

    fn source_for(&self, work: &WorkItem) -> FileSource {
        match &self.input_override {
            Some(path) => FileSource::new(path.clone()),
            None => self.inputs.source(work.year, work.day),
        }
    }

    fn has_input(&self, work: &WorkItem) -> bool {
        match &self.input_override {
            Some(path) => path.is_file(),
            None => self.inputs.contains(work.year, work.day),
        }
    }

    /// Inputs the given work items need that do not exist
    pub fn missing_inputs(&self, work_items: &[WorkItem]) -> Vec<PathBuf> {
        work_items
            .iter()
            .filter(|work| !self.has_input(work))
            .map(|work| self.input_path(work))
            .collect()
    }

    /// Execute all work items in (year, day) order, stopping at the first failed phase
    pub fn execute(
        &self,
        work_items: &[WorkItem],
        observer: &mut dyn PhaseObserver,
    ) -> Result<Vec<PhaseReport>, PhaseError> {
        let runner = PuzzleRunner::new(&self.registry);
        let mut reports = Vec::new();

        for work in work_items {
            let source = self.source_for(work);
            tracing::info!(year = work.year, day = work.day, input = %source, "running solver");
            reports.extend(runner.run(
                work.year,
                work.day,
                work.parts.clone(),
                &source,
                observer,
            )?);
        }

        tracing::debug!(phases = reports.len(), "all work items finished");
        Ok(reports)
    }
}
