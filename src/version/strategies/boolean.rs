//! Boolean version dialect
//!
//! Every string is a valid version and no normalization happens. Any difference
//! between the local and remote strings means an update is available.

use crate::version::depth::ComparisonDepth;
use crate::version::strategy::VersionStrategy;

pub struct BooleanStrategy;

impl VersionStrategy for BooleanStrategy {
    fn is_valid(&self, _version: &str) -> bool {
        true
    }

    fn normalize<'a>(&self, version: &'a str) -> &'a str {
        version
    }

    fn is_older(&self, local: &str, remote: &str, _depth: ComparisonDepth) -> bool {
        local != remote
    }
}
