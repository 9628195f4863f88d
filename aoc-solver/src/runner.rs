//! Two-phase puzzle runner
//!
//! A run executes the parts of one day strictly in order. Each phase reads the
//! input source from the start, parses it into a fresh solver instance, solves
//! its part and reports the answer with timings. Nothing parsed or computed in
//! one phase is visible to the next, and the first failing phase ends the run.

use crate::error::SolverError;
use crate::registry::SolverRegistry;
use crate::source::InputSource;
use chrono::{TimeDelta, Utc};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Outcome of one successful phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseReport {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: String,
    /// Time spent reading the input source
    pub read_duration: TimeDelta,
    /// Time spent turning the input text into the solver's parsed data
    pub parse_duration: TimeDelta,
    /// Time spent in the part solver
    pub solve_duration: TimeDelta,
}

impl PhaseReport {
    /// Read, parse and solve time together
    pub fn total_duration(&self) -> TimeDelta {
        self.read_duration + self.parse_duration + self.solve_duration
    }
}

/// A phase could not produce an answer
///
/// Terminal for the run: later phases are not attempted.
#[derive(Debug, Error)]
#[error("{year}/{day:02} part {part} failed: {source}")]
pub struct PhaseError {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    #[source]
    pub source: SolverError,
}

/// Receives progress from a run as it happens
pub trait PhaseObserver {
    /// Called before the input is read for a phase
    fn phase_started(&mut self, _year: u16, _day: u8, _part: u8) {}

    /// Called once a phase produced its answer
    fn phase_finished(&mut self, report: &PhaseReport);
}

/// Observer that ignores every event
pub struct SilentObserver;

impl PhaseObserver for SilentObserver {
    fn phase_finished(&mut self, _report: &PhaseReport) {}
}

/// Runs the phases of a registered day against an input source
pub struct PuzzleRunner<'r> {
    registry: &'r SolverRegistry,
}

impl<'r> PuzzleRunner<'r> {
    pub fn new(registry: &'r SolverRegistry) -> Self {
        Self { registry }
    }

    /// Run a single phase: read `source`, parse, solve `part`
    ///
    /// The input text and parsed data are dropped before this returns,
    /// whether the phase succeeds or not.
    pub fn run_phase<I>(
        &self,
        year: u16,
        day: u8,
        part: u8,
        source: &I,
    ) -> Result<PhaseReport, PhaseError>
    where
        I: InputSource + ?Sized,
    {
        let _span = tracing::debug_span!("phase", year, day, part).entered();
        let fail = |source: SolverError| PhaseError {
            year,
            day,
            part,
            source,
        };

        let read_start = Utc::now();
        let input = source.read().map_err(|e| fail(e.into()))?;
        let read_duration = Utc::now() - read_start;
        tracing::debug!(%source, bytes = input.len(), "input read");

        let solver = self
            .registry
            .create_solver(year, day, &input)
            .map_err(fail)?;
        let result = solver.solve(part).map_err(|e| fail(e.into()))?;

        let report = PhaseReport {
            year,
            day,
            part,
            parse_duration: solver.parse_duration(),
            solve_duration: result.duration(),
            read_duration,
            answer: result.answer,
        };
        tracing::debug!(answer = %report.answer, "phase finished");
        Ok(report)
    }

    /// Run `parts` in order, stopping at the first failure
    ///
    /// `observer` hears about each phase as it starts and finishes; a failed
    /// phase is only reported through the returned error.
    pub fn run<I>(
        &self,
        year: u16,
        day: u8,
        parts: RangeInclusive<u8>,
        source: &I,
        observer: &mut dyn PhaseObserver,
    ) -> Result<Vec<PhaseReport>, PhaseError>
    where
        I: InputSource + ?Sized,
    {
        let mut reports = Vec::new();
        for part in parts {
            observer.phase_started(year, day, part);
            let report = self.run_phase(year, day, part, source)?;
            observer.phase_finished(&report);
            reports.push(report);
        }
        Ok(reports)
    }
}
