//! GitHub release redirect registry implementation
//!
//! `https://github.com/<owner>/<repo>/releases/latest` redirects to
//! `.../releases/tag/<TAG>` when the repository has a release, and to
//! `.../releases` when it has none. Only the final URL is inspected, so a
//! `HEAD` request is enough and no page body is downloaded.

use std::time::Duration;

use reqwest::redirect::Policy;
use tracing::{debug, warn};

use crate::config::{CheckerConfig, MAX_REDIRECTS};
use crate::version::error::RegistryError;
use crate::version::registry::Registry;

/// Path segment preceding the tag in a resolved release URL
const TAG_MARKER: &str = "/tag/";

/// Registry implementation following GitHub's "latest release" redirect
pub struct GitHubReleaseRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubReleaseRegistry {
    /// Creates a new GitHubReleaseRegistry with a custom base URL
    pub fn new(base_url: &str) -> Result<Self, RegistryError> {
        Self::from_config(&CheckerConfig {
            base_url: base_url.to_string(),
            ..CheckerConfig::default()
        })
    }

    /// Fails if the HTTP client cannot be built, e.g. for a user agent that is not
    /// a valid header value
    pub fn from_config(config: &CheckerConfig) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_millis(config.timeout_ms))
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(RegistryError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn latest_release_url(&self, owner: &str, repository: &str) -> String {
        format!("{}/{}/{}/releases/latest", self.base_url, owner, repository)
    }
}

#[async_trait::async_trait]
impl Registry for GitHubReleaseRegistry {
    async fn fetch_latest_tag(
        &self,
        owner: &str,
        repository: &str,
    ) -> Result<Option<String>, RegistryError> {
        let url = self.latest_release_url(owner, repository);
        debug!("Resolving latest release: {}", url);

        let response = self.client.head(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(format!("{}/{}", owner, repository)));
        }

        if !status.is_success() {
            warn!("Release lookup returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let resolved = response.url();
        debug!("Latest release resolved to {}", resolved);

        extract_tag(resolved.path()).map(decode_tag).transpose()
    }
}

/// Extract the release tag from a resolved URL path
///
/// Returns the text after the last `/tag/`, or `None` if the marker is absent
/// or nothing follows it.
pub fn extract_tag(path: &str) -> Option<&str> {
    let start = path.rfind(TAG_MARKER)? + TAG_MARKER.len();
    Some(&path[start..]).filter(|tag| !tag.is_empty())
}

/// Percent-decode a tag taken from a URL path
///
/// `%C3%A91.2.0` becomes `é1.2.0`. Escapes that do not decode to UTF-8 are
/// reported as an invalid response.
pub fn decode_tag(raw: &str) -> Result<String, RegistryError> {
    urlencoding::decode(raw)
        .map(|tag| tag.into_owned())
        .map_err(|e| {
            RegistryError::InvalidResponse(format!("Undecodable tag '{}': {}", raw, e))
        })
}
