//! Incremental version dialect
//!
//! Accepts dot-separated decimal groups with an optional one-character prefix:
//! - `1`, `1.0`, `158.080.098900.55400`
//! - `v1.2.3`, `v.1.2.3`, `V2.0`
//!
//! Comparison is group-by-group and stops at the requested depth or at the end of
//! the shorter version, whichever comes first.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

use crate::version::depth::ComparisonDepth;
use crate::version::strategy::VersionStrategy;

static INCREMENTAL_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^0-9]?\.?(?P<version>[0-9]+(?:\.[0-9]+)*)$")
        .expect("incremental version pattern is valid")
});

pub struct IncrementalStrategy;

impl VersionStrategy for IncrementalStrategy {
    fn is_valid(&self, version: &str) -> bool {
        INCREMENTAL_VERSION.is_match(version)
    }

    fn normalize<'a>(&self, version: &'a str) -> &'a str {
        INCREMENTAL_VERSION
            .captures(version)
            .and_then(|caps| caps.name("version"))
            .map_or(version, |m| m.as_str())
    }

    fn is_older(&self, local: &str, remote: &str, depth: ComparisonDepth) -> bool {
        let local: Vec<&str> = local.split('.').collect();
        let remote: Vec<&str> = remote.split('.').collect();
        let effective_depth = depth.get().min(local.len()).min(remote.len());

        for (l, r) in local.iter().zip(&remote).take(effective_depth) {
            match compare_group(l, r) {
                Ordering::Less => return true,
                Ordering::Greater => return false,
                Ordering::Equal => {}
            }
        }

        false
    }
}

/// Compare two digit groups as decimal integers of any size
///
/// Leading zeros are insignificant: `007` equals `7`.
fn compare_group(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn depth(n: usize) -> ComparisonDepth {
        ComparisonDepth::new(n).unwrap()
    }

    #[rstest]
    #[case("1")]
    #[case("1.0")]
    #[case("1.0.0")]
    #[case("2.4.1.5")]
    #[case("158.080.098900.55400")]
    #[case("v1.0.0")]
    #[case("V1.0.0")]
    #[case("v.2.4.1.5")]
    #[case("r10")]
    #[case("007.1")]
    fn accepts_valid_tokens(#[case] version: &str) {
        assert!(IncrementalStrategy.is_valid(version), "{version}");
    }

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("v")]
    #[case("v.")]
    #[case("1..0.0")]
    #[case("1.0.0.")]
    #[case(".")]
    #[case("vv1.0.0")]
    #[case("v..1.0")]
    #[case("1.0a.0")]
    #[case("1.0.0-beta")]
    #[case("1.0.0+build")]
    #[case("1.0 ")]
    #[case("release-1.0")]
    #[case("١.٢")]
    fn rejects_invalid_tokens(#[case] version: &str) {
        assert!(!IncrementalStrategy.is_valid(version), "{version}");
    }

    #[rstest]
    #[case("1.2.3", "1.2.3")]
    #[case("v1.2.3", "1.2.3")]
    #[case("v.1.2.3", "1.2.3")]
    #[case("r10", "10")]
    #[case("158.080.098900.55400", "158.080.098900.55400")]
    fn normalize_strips_prefix(#[case] version: &str, #[case] expected: &str) {
        let normalized = IncrementalStrategy.normalize(version);
        assert_eq!(normalized, expected);
        assert!(
            normalized
                .split('.')
                .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()))
        );
    }

    #[rstest]
    #[case("1.0.0", "2.0.0", 1, true)]
    #[case("2.0.0", "1.9.9", 1, false)]
    #[case("1.0.0", "1.1.0", 1, false)] // difference beyond major is ignored
    #[case("1.0.0", "1.1.0", 2, true)]
    #[case("1.1.0", "1.0.9", 2, false)]
    #[case("1.1.0", "1.1.1", 2, false)]
    #[case("1.1.0", "1.1.1", 3, true)]
    #[case("1.1.1.1", "1.1.1.2", 4, true)]
    #[case("2.4", "2.4.1.5", 2, false)]
    #[case("2.3.9", "2.4.1.5", 2, true)]
    #[case("2.4", "2.4.1.5", 4, false)] // shorter side bounds the depth
    #[case("2.4.1.5", "2.4.1.5.10", 5, false)]
    #[case("1.2.3.4.5", "1.2.3.4.6", 5, true)]
    #[case("1.2.3.4.5", "1.2.3.4.6", 4, false)]
    #[case("1.09", "1.10", 2, true)] // leading zeros are decimal
    #[case("1.010", "1.9", 2, false)]
    #[case("007", "7", 1, false)]
    #[case("99999999999999999999999", "100000000000000000000000", 1, true)]
    fn is_older_compares_up_to_depth(
        #[case] local: &str,
        #[case] remote: &str,
        #[case] n: usize,
        #[case] expected: bool,
    ) {
        assert_eq!(IncrementalStrategy.is_older(local, remote, depth(n)), expected);
    }

    #[rstest]
    #[case("1")]
    #[case("2.4.1.5")]
    #[case("158.080.098900.55400")]
    fn version_is_never_older_than_itself(#[case] version: &str) {
        for n in 1..=6 {
            assert!(!IncrementalStrategy.is_older(version, version, depth(n)));
        }
    }

    #[test]
    fn compare_group_orders_numerically() {
        assert_eq!(compare_group("10", "9"), Ordering::Greater);
        assert_eq!(compare_group("0", "000"), Ordering::Equal);
        assert_eq!(compare_group("0012", "13"), Ordering::Less);
    }
}
