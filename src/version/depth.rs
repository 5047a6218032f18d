//! Number of leading version groups considered significant

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// How many leading groups of a version take part in an update decision
///
/// - 1: major only
/// - 2: major.minor (default)
/// - 3: major.minor.build
/// - 4: major.minor.build.revision
///
/// Larger values are accepted and only matter for versions with more than four groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComparisonDepth(NonZeroUsize);

impl ComparisonDepth {
    pub const MAJOR: Self = Self(NonZeroUsize::MIN);
    pub const MINOR: Self = Self(NonZeroUsize::MIN.saturating_add(1));
    pub const BUILD: Self = Self(NonZeroUsize::MIN.saturating_add(2));
    pub const REVISION: Self = Self(NonZeroUsize::MIN.saturating_add(3));

    /// Returns `None` for a depth of zero
    pub fn new(depth: usize) -> Option<Self> {
        NonZeroUsize::new(depth).map(Self)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for ComparisonDepth {
    fn default() -> Self {
        Self::MINOR
    }
}

impl fmt::Display for ComparisonDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            1 => write!(f, "major"),
            2 => write!(f, "minor"),
            3 => write!(f, "build"),
            4 => write!(f, "revision"),
            n => write!(f, "{}", n),
        }
    }
}

impl FromStr for ComparisonDepth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "major" => Ok(Self::MAJOR),
            "minor" => Ok(Self::MINOR),
            "build" | "patch" => Ok(Self::BUILD),
            "revision" => Ok(Self::REVISION),
            other => other
                .parse::<usize>()
                .ok()
                .and_then(Self::new)
                .ok_or_else(|| format!("invalid comparison depth: '{}'", s)),
        }
    }
}
