use std::fmt;

use thiserror::Error;

/// Which side of a comparison a rejected version came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSide {
    /// Supplied by the caller
    Local,
    /// Extracted from the repository's latest release tag
    Remote,
}

impl fmt::Display for VersionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionSide::Local => write!(f, "local"),
            VersionSide::Remote => write!(f, "remote"),
        }
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to create HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("Repository not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Invalid {side} version: '{version}'")]
    InvalidVersion { side: VersionSide, version: String },

    #[error("No release version found for {owner}/{repository}")]
    NoVersion { owner: String, repository: String },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Failed to start blocking runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl CheckError {
    pub(crate) fn invalid(side: VersionSide, version: &str) -> Self {
        CheckError::InvalidVersion {
            side,
            version: version.to_string(),
        }
    }

    /// Returns true when the repository published a tag this client cannot interpret
    pub fn is_remote_unparsable(&self) -> bool {
        matches!(
            self,
            CheckError::InvalidVersion {
                side: VersionSide::Remote,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_version_message_names_side_and_value() {
        let err = CheckError::invalid(VersionSide::Local, "1..0");
        assert_eq!(err.to_string(), "Invalid local version: '1..0'");
        assert!(!err.is_remote_unparsable());

        let err = CheckError::invalid(VersionSide::Remote, "nightly");
        assert_eq!(err.to_string(), "Invalid remote version: 'nightly'");
        assert!(err.is_remote_unparsable());
    }

    #[test]
    fn registry_error_is_transparent() {
        let err: CheckError = RegistryError::NotFound("ghost/repo".to_string()).into();
        assert_eq!(err.to_string(), "Repository not found: ghost/repo");
    }
}
