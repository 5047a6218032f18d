//! Checks whether a local version is older than a repository's latest release.
//!
//! The latest release is discovered by following the
//! `<host>/<owner>/<repository>/releases/latest` redirect, without any release API.
//!
//! ```no_run
//! use release_checker::{CompareStrategy, ComparisonDepth, UpdateChecker};
//!
//! # async fn run() -> Result<(), release_checker::CheckError> {
//! let checker = UpdateChecker::new("owner", "repository", CompareStrategy::Incremental)?;
//! if checker.is_update_available("v1.2.0", ComparisonDepth::MINOR).await? {
//!     println!("a newer release is available");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod logging;
pub mod version;

pub use config::CheckerConfig;
pub use version::checker::UpdateChecker;
pub use version::depth::ComparisonDepth;
pub use version::error::{CheckError, RegistryError, VersionSide};
pub use version::strategy::CompareStrategy;
