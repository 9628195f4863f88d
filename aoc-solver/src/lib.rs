//! Advent of Code Solver Library
//!
//! A type-safe framework for running Advent of Code puzzle solvers.
//! Each puzzle is a solver with its own input parsing and one function per
//! part; the [`runner`] executes the parts of a day as independent phases.
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based interface for defining solvers ([`AocParser`], [`PartSolver`], [`Solver`])
//! - A registry of solvers keyed by year and day, filled by plugins
//! - Input sources that are re-read for every phase
//! - A runner that times and reports each phase and stops at the first failure
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{
//!     AocParser, MemorySource, ParseError, PartSolver, PuzzleRunner, RegistryBuilder,
//!     SilentObserver, SolveError, Solver, register_solver,
//! };
//!
//! struct MyDay1;
//!
//! impl AocParser for MyDay1 {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| {
//!                 line.parse()
//!                     .map_err(|_| ParseError::InvalidFormat("Expected integer".to_string()))
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for MyDay1 {
//!     fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i32>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for MyDay1 {
//!     fn solve(shared: &Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().product::<i32>().to_string())
//!     }
//! }
//!
//! impl Solver for MyDay1 {
//!     const PARTS: u8 = 2;
//!
//!     fn solve_part(shared: &Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => <Self as PartSolver<1>>::solve(shared),
//!             2 => <Self as PartSolver<2>>::solve(shared),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let registry = register_solver!(RegistryBuilder::new(), MyDay1, 2023, 1)
//!     .unwrap()
//!     .build();
//!
//! let runner = PuzzleRunner::new(&registry);
//! let source = MemorySource::new("1\n2\n3\n4");
//! let reports = runner.run(2023, 1, 1..=2, &source, &mut SilentObserver).unwrap();
//! assert_eq!(reports[0].answer, "10");
//! assert_eq!(reports[1].answer, "24");
//! ```
//!
//! # Key Concepts
//!
//! ## Solver Traits
//!
//! [`AocParser`] turns the input text into `SharedData`. Each [`PartSolver<N>`]
//! computes one answer from a shared reference to that data. [`Solver`] ties
//! the parts together; `#[derive(AocSolver)]` writes it for you:
//!
//! ```ignore
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Day1;
//! ```
//!
//! ## Plugin System
//!
//! `#[derive(AutoRegisterSolver)]` submits the solver to a global inventory that
//! [`RegistryBuilder::register_all_plugins`] collects:
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2023, day = 1, tags = ["easy"])]
//! struct Day1;
//! ```
//!
//! ## Phases
//!
//! [`PuzzleRunner::run`] treats every part as its own phase: the source is read
//! again and parsed again, so parts cannot leak state into each other. If a
//! phase fails, the following phases are skipped and a [`PhaseError`] is
//! returned.

mod error;
mod instance;
mod registry;
pub mod runner;
mod solver;
mod source;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError, SourceError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin, SolverRegistry,
    instantiate,
};
pub use runner::{PhaseError, PhaseObserver, PhaseReport, PuzzleRunner, SilentObserver};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};
pub use source::{FileSource, InputSource, MemorySource};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
