//! Solver instance implementation

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Result from solving a puzzle part, including timing information
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The answer string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A solver instance holding one parse of the input
///
/// The parsed input is borrowed from the input text where the solver allows it.
pub struct SolverInstance<'a, S: Solver> {
    shared: S::SharedData<'a>,
    parse_duration: TimeDelta,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Create a new solver instance by parsing input
    ///
    /// Records parse timing internally.
    ///
    /// # Returns
    /// * `Ok(SolverInstance)` - Successfully parsed and created instance with timing
    /// * `Err(ParseError)` - Parsing failed
    pub fn new(input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_duration = Utc::now() - parse_start;

        Ok(Self {
            shared,
            parse_duration,
        })
    }
}

/// Type-erased interface for working with any solver through dynamic dispatch
///
/// The registry hands out `Box<dyn DynSolver>` so that callers can run any
/// registered day without knowing its parsed data type.
///
/// # Example
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn example(solver: Box<dyn DynSolver>) -> Result<(), Box<dyn std::error::Error>> {
///     let result = solver.solve(1)?;
///     println!("Part 1: {} (took {})", result.answer, result.duration());
///     println!("Parse took {}", solver.parse_duration());
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve the specified part with timing
    ///
    /// # Returns
    /// * `Ok(SolveResult)` - The part was solved successfully with timing info
    /// * `Err(SolveError)` - The part is out of range, not implemented, or solving failed
    fn solve(&self, part: u8) -> Result<SolveResult, SolveError>;

    /// Get the number of parts this solver supports
    fn parts(&self) -> u8;

    /// How long parsing the input took
    fn parse_duration(&self) -> TimeDelta;
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&self.shared, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn parse_duration(&self) -> TimeDelta {
        self.parse_duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::solver::AocParser;

    struct Doubler;

    impl AocParser for Doubler {
        type SharedData<'a> = Vec<&'a str>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            if input.is_empty() {
                return Err(ParseError::MissingData("empty input".into()));
            }
            Ok(input.lines().collect())
        }
    }

    impl Solver for Doubler {
        const PARTS: u8 = 2;

        fn solve_part(shared: &Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            Ok((shared.len() * usize::from(part)).to_string())
        }
    }

    #[test]
    fn test_instance_records_metadata() {
        let instance = SolverInstance::<Doubler>::new("a\nb\nc").unwrap();
        assert_eq!(instance.parts(), 2);
        assert!(instance.parse_duration() >= TimeDelta::zero());
    }

    #[test]
    fn test_solve_is_repeatable() {
        let instance = SolverInstance::<Doubler>::new("a\nb\nc").unwrap();
        assert_eq!(instance.solve(1).unwrap().answer, "3");
        assert_eq!(instance.solve(2).unwrap().answer, "6");
        assert_eq!(instance.solve(1).unwrap().answer, "3");
    }

    #[test]
    fn test_solve_rejects_out_of_range_part() {
        let instance = SolverInstance::<Doubler>::new("a").unwrap();
        assert!(matches!(instance.solve(0), Err(SolveError::PartOutOfRange(0))));
        assert!(matches!(instance.solve(3), Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn test_parse_failure_propagates() {
        let result = SolverInstance::<Doubler>::new("");
        assert!(matches!(result, Err(ParseError::MissingData(_))));
    }
}
