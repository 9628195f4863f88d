//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use std::collections::BTreeMap;

// ============================================================================
// Year/Day Bounds
// ============================================================================

/// Base year for AoC (first year of Advent of Code)
pub const BASE_YEAR: u16 = 2015;
/// Maximum number of years supported (2015-2034)
pub const MAX_YEARS: u16 = 20;
/// Days per year in AoC (1-25)
pub const DAYS_PER_YEAR: u8 = 25;

#[inline]
fn is_valid_year_day(year: u16, day: u8) -> bool {
    (BASE_YEAR..BASE_YEAR + MAX_YEARS).contains(&year) && (1..=DAYS_PER_YEAR).contains(&day)
}

// ============================================================================
// Factory Types
// ============================================================================

/// Factory function type for creating solver instances
///
/// A factory parses the given input and returns a solver borrowing from it.
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Parse `input` with solver `S` and box the resulting instance
///
/// This is the factory body used by [`RegisterableSolver`] and [`register_solver!`].
pub fn instantiate<'a, S>(input: &'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
where
    S: Solver + 'static,
{
    Ok(Box::new(SolverInstance::<S>::new(input)?))
}

/// Builder for constructing a SolverRegistry with fluent API
///
/// The builder pattern allows for method chaining and ensures the registry
/// is immutable after construction. It also provides duplicate detection
/// during registration.
///
/// # Example
///
/// ```
/// # use aoc_solver::{AocParser, ParseError, RegistryBuilder, SolveError, Solver, instantiate};
/// # struct Day1;
/// # impl AocParser for Day1 {
/// #     type SharedData<'a> = &'a str;
/// #     fn parse(input: &str) -> Result<&str, ParseError> { Ok(input) }
/// # }
/// # impl Solver for Day1 {
/// #     const PARTS: u8 = 1;
/// #     fn solve_part(shared: &&str, _: u8) -> Result<String, SolveError> { Ok(shared.len().to_string()) }
/// # }
/// let registry = RegistryBuilder::new()
///     .register(2023, 1, 1, |input: &str| instantiate::<Day1>(input))
///     .unwrap()
///     .build();
/// assert!(registry.contains(2023, 1));
/// ```
pub struct RegistryBuilder {
    solvers: BTreeMap<(u16, u8), SolverFactoryEntry>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            solvers: BTreeMap::new(),
        }
    }

    /// Register a solver factory function for a specific year and day
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solver registered, ready for chaining
    /// * `Err(RegistrationError::DuplicateSolver)` - A solver already exists for this year-day
    /// * `Err(RegistrationError::InvalidYearDay)` - Year or day outside the supported range
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        if !is_valid_year_day(year, day) {
            return Err(RegistrationError::InvalidYearDay(year, day));
        }
        if self.solvers.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        self.solvers.insert(
            (year, day),
            SolverFactoryEntry {
                factory: Box::new(factory),
                parts,
            },
        );
        Ok(self)
    }

    /// Register all collected solver plugins
    ///
    /// Iterates through all plugins submitted via `inventory::submit!` and
    /// registers each one with the builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use aoc_solver::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_all_plugins()
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use aoc_solver::RegistryBuilder;
    /// // Register only 2023 solvers tagged as "easy"
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.year == 2023 && plugin.tags.contains(&"easy"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            solvers: self.solvers,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating solvers
///
/// The registry maps (year, day) pairs to factory functions. Every call to
/// [`SolverRegistry::create_solver`] parses the input again, so each caller
/// gets an instance that shares nothing with earlier ones.
pub struct SolverRegistry {
    solvers: BTreeMap<(u16, u8), SolverFactoryEntry>,
}

impl SolverRegistry {
    /// Create a solver instance for a specific year and day
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully parsed and created solver
    /// * `Err(SolverError)` - Year/day invalid, solver not found, or parsing failed
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        if !is_valid_year_day(year, day) {
            return Err(SolverError::InvalidYearDay(year, day));
        }
        let entry = self
            .solvers
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    /// Iterate over metadata for all registered factories in (year, day) order
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.solvers.iter().map(|(&(year, day), entry)| FactoryInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    /// Get metadata for a specific factory
    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        self.solvers.get(&(year, day)).map(|entry| FactoryInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    /// Check if a factory exists for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.solvers.contains_key(&(year, day))
    }

    /// Get the number of registered factories
    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }
}

/// Trait for solvers that can register themselves with a registry builder
///
/// Unlike [`Solver`], this trait has no associated types, so different solver
/// types can be stored side by side as `&'static dyn RegisterableSolver`.
/// Every `Solver` gets it through a blanket impl.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific year and day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;

    /// Get the number of parts this solver supports
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register(year, day, S::PARTS, |input: &str| instantiate::<S>(input))
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Plugin information for automatic solver registration
///
/// Normally submitted by `#[derive(AutoRegisterSolver)]`, but it can be
/// submitted by hand:
///
/// ```no_run
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverPlugin};
///
/// struct Day1Solver;
///
/// impl AocParser for Day1Solver {
///     type SharedData<'a> = ();
///
///     fn parse(_: &str) -> Result<(), ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for Day1Solver {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &(), part: u8) -> Result<String, SolveError> {
///         Err(SolveError::PartNotImplemented(part))
///     }
/// }
///
/// inventory::submit! {
///     SolverPlugin {
///         year: 2023,
///         day: 1,
///         solver: &Day1Solver,
///         tags: &["2023", "easy"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Optional tags for filtering (e.g., "easy", "2023", "parsing")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

/// Register a solver type with a registry builder
///
/// Evaluates to `Result<RegistryBuilder, RegistrationError>`.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, RegistryBuilder, SolveError, Solver, register_solver};
///
/// struct MyDay1Solver;
///
/// impl AocParser for MyDay1Solver {
///     type SharedData<'a> = usize;
///
///     fn parse(input: &str) -> Result<usize, ParseError> {
///         Ok(input.lines().count())
///     }
/// }
///
/// impl Solver for MyDay1Solver {
///     const PARTS: u8 = 1;
///
///     fn solve_part(lines: &usize, _: u8) -> Result<String, SolveError> {
///         Ok(lines.to_string())
///     }
/// }
///
/// let registry = register_solver!(RegistryBuilder::new(), MyDay1Solver, 2023, 1)
///     .unwrap()
///     .build();
/// let solver = registry.create_solver(2023, 1, "a\nb").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "2");
/// ```
#[macro_export]
macro_rules! register_solver {
    ($builder:expr, $solver:ty, $year:expr, $day:expr) => {
        $builder.register(
            $year,
            $day,
            <$solver as $crate::Solver>::PARTS,
            |input: &str| $crate::instantiate::<$solver>(input),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::solver::AocParser;

    struct LineCount;

    impl AocParser for LineCount {
        type SharedData<'a> = usize;

        fn parse(input: &str) -> Result<usize, ParseError> {
            Ok(input.lines().count())
        }
    }

    impl Solver for LineCount {
        const PARTS: u8 = 2;

        fn solve_part(lines: &usize, part: u8) -> Result<String, SolveError> {
            Ok((lines * usize::from(part)).to_string())
        }
    }

    fn builder_with(year: u16, day: u8) -> Result<RegistryBuilder, RegistrationError> {
        LineCount.register_with(RegistryBuilder::new(), year, day)
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let builder = builder_with(2023, 1).unwrap();
        let result = LineCount.register_with(builder, 2023, 1);
        assert!(matches!(
            result,
            Err(RegistrationError::DuplicateSolver(2023, 1))
        ));
    }

    #[test]
    fn test_out_of_range_registration_rejected() {
        assert!(matches!(
            builder_with(2014, 1),
            Err(RegistrationError::InvalidYearDay(2014, 1))
        ));
        assert!(matches!(
            builder_with(2035, 1),
            Err(RegistrationError::InvalidYearDay(2035, 1))
        ));
        assert!(matches!(
            builder_with(2023, 0),
            Err(RegistrationError::InvalidYearDay(2023, 0))
        ));
        assert!(matches!(
            builder_with(2023, 26),
            Err(RegistrationError::InvalidYearDay(2023, 26))
        ));
    }

    #[test]
    fn test_create_solver_lookup() {
        let registry = builder_with(2023, 1).unwrap().build();

        let solver = registry.create_solver(2023, 1, "x\ny\nz").unwrap();
        assert_eq!(solver.solve(2).unwrap().answer, "6");

        assert!(matches!(
            registry.create_solver(2023, 2, ""),
            Err(SolverError::NotFound(2023, 2))
        ));
        assert!(matches!(
            registry.create_solver(1999, 2, ""),
            Err(SolverError::InvalidYearDay(1999, 2))
        ));
    }

    #[test]
    fn test_info_is_ordered() {
        let builder = builder_with(2023, 5).unwrap();
        let builder = LineCount.register_with(builder, 2016, 9).unwrap();
        let builder = LineCount.register_with(builder, 2023, 2).unwrap();
        let registry = builder.build();

        let keys: Vec<(u16, u8)> = registry.iter_info().map(|i| (i.year, i.day)).collect();
        assert_eq!(keys, vec![(2016, 9), (2023, 2), (2023, 5)]);
        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.get_info(2023, 2),
            Some(FactoryInfo {
                year: 2023,
                day: 2,
                parts: 2
            })
        );
        assert!(registry.get_info(2023, 3).is_none());
    }

    #[test]
    fn test_register_solver_macro() {
        let registry = register_solver!(RegistryBuilder::new(), LineCount, 2020, 3)
            .unwrap()
            .build();
        assert!(registry.contains(2020, 3));
        assert!(!registry.is_empty());
    }
}
