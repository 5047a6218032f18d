//! Tracing subscriber setup for the command-line front end

use std::path::{Path, PathBuf};

use anyhow::anyhow;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::config::log_path;

/// Filter used when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "info";

/// Where log records are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    /// Maps the `--log-file [PATH]` flag: absent, present without a path, or with one
    pub fn from_flag(flag: Option<Option<PathBuf>>) -> Self {
        match flag {
            None => LogTarget::Stderr,
            Some(None) => LogTarget::File(log_path()),
            Some(Some(path)) => LogTarget::File(path),
        }
    }
}

/// Installs the global subscriber
///
/// The returned guard flushes pending records when dropped and must be kept alive
/// for as long as logging is needed.
pub fn init(target: &LogTarget, json: bool) -> anyhow::Result<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let (writer, guard) = match target {
        LogTarget::Stderr => tracing_appender::non_blocking(std::io::stderr()),
        LogTarget::File(path) => {
            let (dir, file_name) = split_log_path(path)?;
            std::fs::create_dir_all(dir)?;
            tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name))
        }
    };

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(*target == LogTarget::Stderr);
    let layer = if json {
        layer.json().with_filter(filter).boxed()
    } else {
        layer.with_filter(filter).boxed()
    };

    tracing_subscriber::registry().with(layer).try_init()?;

    Ok(guard)
}

fn split_log_path(path: &Path) -> anyhow::Result<(&Path, &std::ffi::OsStr)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("log path has no file name: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok((dir, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_flag_defaults_to_stderr() {
        assert_eq!(LogTarget::from_flag(None), LogTarget::Stderr);
    }

    #[test]
    fn from_flag_without_path_uses_default_log_path() {
        assert_eq!(LogTarget::from_flag(Some(None)), LogTarget::File(log_path()));
    }

    #[test]
    fn from_flag_with_path_uses_it() {
        let path = PathBuf::from("/tmp/checker.log");
        assert_eq!(
            LogTarget::from_flag(Some(Some(path.clone()))),
            LogTarget::File(path)
        );
    }

    #[test]
    fn split_log_path_handles_bare_file_name() {
        let (dir, file_name) = split_log_path(Path::new("checker.log")).unwrap();
        assert_eq!(dir, Path::new("."));
        assert_eq!(file_name, "checker.log");
    }

    #[test]
    fn split_log_path_rejects_directory_only_path() {
        assert!(split_log_path(Path::new("/")).is_err());
    }
}
