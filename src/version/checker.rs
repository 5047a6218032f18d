//! Update decision for a single repository
//!
//! One call runs through:
//!
//! ```text
//! Start → LocalValidated → RemoteResolved ─┬─ found ───────→ RemoteValidated → Compared → Done
//!                                          ├─ not-found ───────────────────────────────→ Done(false)
//!                                          └─ transport-failed ────────────────────────→ Done(false)
//! ```
//!
//! A local or remote validation failure ends the call with
//! [`CheckError::InvalidVersion`] instead.

use std::fmt;
use std::future::Future;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::CheckerConfig;
use crate::version::depth::ComparisonDepth;
use crate::version::error::{CheckError, VersionSide};
use crate::version::registries::GitHubReleaseRegistry;
use crate::version::registry::Registry;
use crate::version::strategy::{CompareStrategy, VersionStrategy};

/// Validate a version and return its canonical form
pub fn canonicalize<'a>(
    strategy: CompareStrategy,
    version: &'a str,
    side: VersionSide,
) -> Result<&'a str, CheckError> {
    if !strategy.is_valid(version) {
        return Err(CheckError::invalid(side, version));
    }
    Ok(strategy.normalize(version))
}

/// Decide whether an update is available once the remote tag is known
///
/// `remote_tag` is `None` when the repository has no release or the lookup failed,
/// in which case no update is reported. The local version is validated first either way.
pub fn decide_update(
    strategy: CompareStrategy,
    local_version: &str,
    remote_tag: Option<&str>,
    depth: ComparisonDepth,
) -> Result<bool, CheckError> {
    let local = canonicalize(strategy, local_version, VersionSide::Local)?;
    compare_to_remote(strategy, local, remote_tag, depth)
}

/// Compare an already canonical local version against the raw remote tag
fn compare_to_remote(
    strategy: CompareStrategy,
    local: &str,
    remote_tag: Option<&str>,
    depth: ComparisonDepth,
) -> Result<bool, CheckError> {
    let Some(remote_tag) = remote_tag else {
        return Ok(false);
    };
    let remote = canonicalize(strategy, remote_tag, VersionSide::Remote)?;

    Ok(strategy.is_older(local, remote, depth))
}

/// Immutable handle checking one repository for updates
///
/// Cheap to share: wrap it in an [`Arc`] to call it from several tasks at once.
/// Equality and hashing consider only the owner, repository and strategy.
#[derive(Clone)]
pub struct UpdateChecker {
    owner: String,
    repository: String,
    strategy: CompareStrategy,
    registry: Arc<dyn Registry>,
}

impl UpdateChecker {
    /// Creates a checker against github.com with default settings
    pub fn new(
        owner: &str,
        repository: &str,
        strategy: CompareStrategy,
    ) -> Result<Self, CheckError> {
        Self::with_config(owner, repository, strategy, &CheckerConfig::default())
    }

    /// Fails only if the HTTP client cannot be built from `config`
    pub fn with_config(
        owner: &str,
        repository: &str,
        strategy: CompareStrategy,
        config: &CheckerConfig,
    ) -> Result<Self, CheckError> {
        let registry = GitHubReleaseRegistry::from_config(config)?;
        Ok(Self::with_registry(owner, repository, strategy, Arc::new(registry)))
    }

    pub fn with_registry(
        owner: &str,
        repository: &str,
        strategy: CompareStrategy,
        registry: Arc<dyn Registry>,
    ) -> Self {
        Self {
            owner: owner.to_string(),
            repository: repository.to_string(),
            strategy,
            registry,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn strategy(&self) -> CompareStrategy {
        self.strategy
    }

    /// Returns true if `local_version` is older than the latest release
    ///
    /// Fails with [`CheckError::InvalidVersion`] if `local_version` is not valid for
    /// this checker's strategy (before any network access) or if the published tag
    /// cannot be parsed.
    ///
    /// A repository without releases yields `Ok(false)`. So does any failure to reach
    /// the repository: an unreachable host is indistinguishable from being up to date.
    pub async fn is_update_available(
        &self,
        local_version: &str,
        depth: ComparisonDepth,
    ) -> Result<bool, CheckError> {
        let local = canonicalize(self.strategy, local_version, VersionSide::Local)?;

        let remote_tag = match self
            .registry
            .fetch_latest_tag(&self.owner, &self.repository)
            .await
        {
            Ok(Some(tag)) => Some(tag),
            Ok(None) => {
                debug!("{} has no release", self);
                None
            }
            Err(e) => {
                warn!("Failed to resolve latest release of {}: {}", self, e);
                None
            }
        };

        let available = compare_to_remote(self.strategy, local, remote_tag.as_deref(), depth)?;
        debug!(
            "{}: local {} vs remote {:?} at depth {} -> update available: {}",
            self, local_version, remote_tag, depth, available
        );
        Ok(available)
    }

    /// Blocking form of [`Self::is_update_available`]
    ///
    /// Runs the lookup on a private current-thread runtime. Inside an async context
    /// that runtime lives on a helper thread and the calling thread blocks until it
    /// finishes.
    pub fn is_update_available_blocking(
        &self,
        local_version: &str,
        depth: ComparisonDepth,
    ) -> Result<bool, CheckError> {
        block_on(self.is_update_available(local_version, depth))?
    }

    /// Returns the normalized tag of the latest release
    ///
    /// Unlike [`Self::is_update_available`], lookup failures are returned as errors and
    /// a repository without releases fails with [`CheckError::NoVersion`].
    pub async fn latest_version(&self) -> Result<String, CheckError> {
        let tag = self
            .registry
            .fetch_latest_tag(&self.owner, &self.repository)
            .await?
            .ok_or_else(|| CheckError::NoVersion {
                owner: self.owner.clone(),
                repository: self.repository.clone(),
            })?;

        canonicalize(self.strategy, &tag, VersionSide::Remote).map(str::to_string)
    }

    /// Blocking form of [`Self::latest_version`]
    pub fn latest_version_blocking(&self) -> Result<String, CheckError> {
        block_on(self.latest_version())?
    }
}

fn block_on<F>(future: F) -> Result<F::Output, CheckError>
where
    F: Future + Send,
    F::Output: Send,
{
    if tokio::runtime::Handle::try_current().is_err() {
        return block_on_new_runtime(future);
    }

    // A runtime cannot be started on a thread that is already driving one.
    std::thread::scope(|scope| {
        scope
            .spawn(|| block_on_new_runtime(future))
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
    })
}

fn block_on_new_runtime<F: Future>(future: F) -> Result<F::Output, CheckError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}

impl PartialEq for UpdateChecker {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner
            && self.repository == other.repository
            && self.strategy == other.strategy
    }
}

impl Eq for UpdateChecker {}

impl Hash for UpdateChecker {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.owner.hash(state);
        self.repository.hash(state);
        self.strategy.hash(state);
    }
}

impl fmt::Debug for UpdateChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateChecker")
            .field("owner", &self.owner)
            .field("repository", &self.repository)
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for UpdateChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repository)
    }
}
