use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log target when `--log` is not given.
pub const LOG_ENV: &str = "FEEDSTORE_LOG";

/// Where diagnostics go. Stdout is never a target: it carries the replayed state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Off,
    Stderr,
    /// Base path; the actual file is `{path}.{timestamp}.{pid}`.
    File(PathBuf),
}

impl LogTarget {
    /// `stderr` or `-` select stderr, an empty value disables logging,
    /// anything else is a file path.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => LogTarget::Off,
            Some("stderr") | Some("-") => LogTarget::Stderr,
            Some(path) => LogTarget::File(PathBuf::from(path)),
        }
    }

    pub fn from_env() -> Self {
        Self::parse(std::env::var(LOG_ENV).ok().as_deref())
    }
}

/// Unique per-run log file name so concurrent replays never share one.
fn unique_log_path(base: &Path, timestamp: u64, pid: u32) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{}.{}", timestamp, pid));
    PathBuf::from(name)
}

/// Install the global subscriber for `target`. Verbosity follows `RUST_LOG`
/// (default `info`).
///
/// Returns the path of the created log file, if any.
pub fn init_tracing(target: &LogTarget) -> io::Result<Option<PathBuf>> {
    let (file_layer, stderr_layer, path) = match target {
        LogTarget::Off => return Ok(None),
        LogTarget::Stderr => {
            let layer = fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_target(true);
            (None, Some(layer), None)
        }
        LogTarget::File(base) => {
            let timestamp = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            let path = unique_log_path(base, timestamp, std::process::id());
            let file = File::create(&path)?;
            let layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_level(true);
            (Some(layer), None, Some(path))
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();
    Ok(path)
}
