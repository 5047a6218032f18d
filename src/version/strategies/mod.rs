//! Dialect implementations of [`VersionStrategy`](crate::version::strategy::VersionStrategy)

mod boolean;
mod incremental;

pub use boolean::BooleanStrategy;
pub use incremental::IncrementalStrategy;
