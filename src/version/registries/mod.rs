//! Registry implementations for resolving release tags

pub mod github;

pub use github::GitHubReleaseRegistry;
