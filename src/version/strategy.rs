//! Version dialect abstraction
//!
//! A strategy bundles the grammar, normalization and comparison rules used
//! for every call made through one [`UpdateChecker`](crate::version::checker::UpdateChecker).

use std::fmt;
use std::str::FromStr;

use crate::version::depth::ComparisonDepth;
use crate::version::strategies::{BooleanStrategy, IncrementalStrategy};

/// Dialect-specific validation, normalization and comparison
pub trait VersionStrategy: Send + Sync {
    /// Check whether the whole string is an acceptable version token
    fn is_valid(&self, version: &str) -> bool;

    /// Strip a valid token to its canonical form
    ///
    /// Callers must validate first; the result for an invalid token is unspecified.
    fn normalize<'a>(&self, version: &'a str) -> &'a str;

    /// Returns true if `local` is older than `remote`
    ///
    /// Both arguments are canonical forms produced by [`Self::normalize`].
    fn is_older(&self, local: &str, remote: &str, depth: ComparisonDepth) -> bool;
}

/// Which dialect a checker uses, fixed at construction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CompareStrategy {
    /// Dot-separated integer groups with an optional one-character prefix
    #[default]
    Incremental,
    /// Any string; any difference means an update is available
    Boolean,
}

impl CompareStrategy {
    fn rules(self) -> &'static dyn VersionStrategy {
        match self {
            CompareStrategy::Incremental => &IncrementalStrategy,
            CompareStrategy::Boolean => &BooleanStrategy,
        }
    }
}

impl VersionStrategy for CompareStrategy {
    fn is_valid(&self, version: &str) -> bool {
        self.rules().is_valid(version)
    }

    fn normalize<'a>(&self, version: &'a str) -> &'a str {
        self.rules().normalize(version)
    }

    fn is_older(&self, local: &str, remote: &str, depth: ComparisonDepth) -> bool {
        self.rules().is_older(local, remote, depth)
    }
}

impl fmt::Display for CompareStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareStrategy::Incremental => write!(f, "incremental"),
            CompareStrategy::Boolean => write!(f, "boolean"),
        }
    }
}

impl FromStr for CompareStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "incremental" => Ok(CompareStrategy::Incremental),
            "boolean" => Ok(CompareStrategy::Boolean),
            _ => Err(format!("unknown compare strategy: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_strategy_is_incremental() {
        assert_eq!(CompareStrategy::default(), CompareStrategy::Incremental);
    }

    #[test]
    fn strategies_dispatch_to_their_dialect() {
        assert!(!CompareStrategy::Incremental.is_valid(""));
        assert!(CompareStrategy::Boolean.is_valid(""));

        assert_eq!(CompareStrategy::Incremental.normalize("v1.2"), "1.2");
        assert_eq!(CompareStrategy::Boolean.normalize("v1.2"), "v1.2");
    }

    #[test]
    fn from_str_round_trips_display() {
        for strategy in [CompareStrategy::Incremental, CompareStrategy::Boolean] {
            assert_eq!(strategy.to_string().parse::<CompareStrategy>(), Ok(strategy));
        }
        assert!("semver".parse::<CompareStrategy>().is_err());
    }
}
