//! Registry mapping (year, day) to solver factories

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use std::collections::BTreeMap;

/// Thread-safe factory producing a solver instance from raw input.
type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

struct Entry {
    factory: SolverFactory,
    parts: u8,
}

/// Metadata for one registered solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverInfo {
    pub year: u16,
    pub day: u8,
    pub parts: u8,
}

/// Builder for a [`SolverRegistry`]. Registration is chainable and rejects
/// duplicate (year, day) combinations.
pub struct RegistryBuilder {
    entries: BTreeMap<(u16, u8), Entry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register a solver type for a specific year and day.
    pub fn register<S>(mut self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        if self.entries.contains_key(&(year, day)) {
            return Err(RegistrationError::Duplicate(year, day));
        }
        let factory: SolverFactory = Box::new(move |input: &str| {
            Ok(Box::new(SolverInstance::<S>::new(year, day, input)?))
        });
        self.entries.insert(
            (year, day),
            Entry {
                factory,
                parts: S::PARTS,
            },
        );
        Ok(self)
    }

    /// Register every solver submitted via [`solver_plugin!`](crate::solver_plugin).
    pub fn register_all_plugins(mut self) -> Result<Self, RegistrationError> {
        for plugin in inventory::iter::<SolverPlugin>() {
            self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
        }
        Ok(self)
    }

    /// Register only the submitted solvers matching `filter`, e.g. by tag.
    pub fn register_plugins_where<F>(mut self, filter: F) -> Result<Self, RegistrationError>
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

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl std::fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("entries", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable lookup table from (year, day) to solver factories.
pub struct SolverRegistry {
    entries: BTreeMap<(u16, u8), Entry>,
}

impl SolverRegistry {
    /// Parse `input` and return a ready solver for the given year and day.
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self
            .entries
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))?;
        (entry.factory)(input).map_err(SolverError::Parse)
    }

    /// Metadata for all registered solvers, ordered by (year, day).
    pub fn iter_info(&self) -> impl Iterator<Item = SolverInfo> + '_ {
        self.entries.iter().map(|(&(year, day), entry)| SolverInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.entries.contains_key(&(year, day))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Type-erased self-registration, blanket-implemented for every [`Solver`].
///
/// `Solver` has associated types, so trait objects of it cannot be collected
/// directly; this object-safe shim is what [`SolverPlugin`] stores.
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;
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
        builder.register::<S>(year, day)
    }
}

/// A solver submitted for automatic registration.
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form labels for filtering at registration time
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

/// Submit a solver for automatic registration.
///
/// # Example
///
/// ```ignore
/// pub struct Day01;
///
/// impl Solver for Day01 { /* ... */ }
///
/// solver_plugin!(Day01, year = 2025, day = 1, tags = ["2025"]);
/// ```
#[macro_export]
macro_rules! solver_plugin {
    ($solver:path, year = $year:literal, day = $day:literal $(, tags = [$($tag:literal),* $(,)?])? $(,)?) => {
        $crate::inventory::submit! {
            $crate::SolverPlugin {
                year: $year,
                day: $day,
                solver: &$solver,
                tags: &[$($($tag),*)?],
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ParseError, SolveError};
    use proptest::prelude::*;

    struct Echo;

    impl Solver for Echo {
        type Parsed<'a> = &'a str;
        const PARTS: u8 = 2;

        fn parse(input: &str) -> Result<Self::Parsed<'_>, ParseError> {
            if input.is_empty() {
                return Err(ParseError::MissingData("empty input".into()));
            }
            Ok(input.trim_end())
        }

        fn solve_part(parsed: &mut Self::Parsed<'_>, part: u8) -> Result<String, SolveError> {
            Ok(format!("{}:{}", part, parsed))
        }
    }

    fn registry() -> SolverRegistry {
        RegistryBuilder::new()
            .register::<Echo>(2025, 1)
            .unwrap()
            .build()
    }

    #[test]
    fn create_and_solve() {
        let registry = registry();
        let mut solver = registry.create_solver(2025, 1, "hello\n").unwrap();
        assert_eq!(solver.parts(), 2);
        assert_eq!(solver.solve(1).unwrap().answer, "1:hello");
        assert_eq!(solver.solve(2).unwrap().answer, "2:hello");
    }

    #[test]
    fn duplicate_registration_rejected() {
        let err = RegistryBuilder::new()
            .register::<Echo>(2025, 1)
            .unwrap()
            .register::<Echo>(2025, 1)
            .unwrap_err();
        assert!(matches!(err, RegistrationError::Duplicate(2025, 1)));
    }

    #[test]
    fn unknown_day_not_found() {
        let err = registry().create_solver(2025, 9, "x").unwrap_err();
        assert!(matches!(err, SolverError::NotFound(2025, 9)));
    }

    #[test]
    fn parse_failure_propagates() {
        let err = registry().create_solver(2025, 1, "").unwrap_err();
        assert!(matches!(err, SolverError::Parse(_)));
    }

    #[test]
    fn iter_info_is_ordered() {
        let registry = RegistryBuilder::new()
            .register::<Echo>(2025, 3)
            .unwrap()
            .register::<Echo>(2024, 7)
            .unwrap()
            .register::<Echo>(2025, 1)
            .unwrap()
            .build();
        let keys: Vec<_> = registry.iter_info().map(|i| (i.year, i.day)).collect();
        assert_eq!(keys, vec![(2024, 7), (2025, 1), (2025, 3)]);
    }

    proptest! {
        #[test]
        fn part_range_is_enforced(part in 0u8..=20u8) {
            let registry = registry();
            let mut solver = registry.create_solver(2025, 1, "x").unwrap();
            let result = solver.solve(part);
            if (1..=Echo::PARTS).contains(&part) {
                prop_assert!(result.is_ok());
            } else {
                prop_assert!(matches!(result.unwrap_err(), SolveError::PartOutOfRange(p) if p == part));
            }
        }
    }
}
