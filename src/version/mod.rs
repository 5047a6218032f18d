//! Version grammar, comparison and release resolution
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│   Checker   │────▶│  Strategy   │
//! │ (resolve)   │     │  (decide)   │     │ (grammar +  │
//! └─────────────┘     └─────────────┘     │  compare)   │
//!        │                                └─────────────┘
//!        ▼                                       │
//! ┌─────────────┐                         ┌─────────────┐
//! │ Registries  │                         │ Strategies  │
//! │  (github)   │                         │(incr, bool) │
//! └─────────────┘                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: `UpdateChecker` handle and the update decision
//! - [`depth`]: Comparison depth (major, minor, build, revision)
//! - [`strategy`]: Version dialect trait and the `CompareStrategy` selector
//! - [`strategies`]: Incremental and Boolean dialects
//! - [`registry`]: Registry trait for resolving the latest release tag
//! - [`registries`]: Concrete registry implementations (GitHub)
//! - [`error`]: Error types for lookups and checks

pub mod checker;
pub mod depth;
pub mod error;
pub mod registries;
pub mod registry;
pub mod strategies;
pub mod strategy;
