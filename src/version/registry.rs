//! Registry trait for resolving the latest release tag of a repository

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;

/// Trait for looking up the latest release of a repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Resolves the tag of the latest release
    ///
    /// # Arguments
    /// * `owner` - The account owning the repository (e.g., "rust-lang")
    /// * `repository` - The repository name (e.g., "rust-analyzer")
    ///
    /// # Returns
    /// * `Ok(Some(tag))` - The raw tag of the latest release (e.g., "v1.2.0")
    /// * `Ok(None)` - The repository has no release
    /// * `Err(RegistryError)` - If the lookup fails
    async fn fetch_latest_tag(
        &self,
        owner: &str,
        repository: &str,
    ) -> Result<Option<String>, RegistryError>;
}
