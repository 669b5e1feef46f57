use std::path::Path;

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "logging-file")]
mod logging_file;

#[derive(Clone, Copy, clap::ValueEnum, Debug, Default, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    fn directive(&self) -> String {
        format!("textkit={self:?}").to_lowercase()
    }
}

// RUST_LOG wins when set
fn env_filter(log_level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level.directive()))
}

pub fn enable_tracing(log_level: LogLevel, log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = env_filter(log_level);
    match log_file {
        #[cfg(feature = "logging-file")]
        Some(path) => logging_file::create_file_tracer(filter, path),
        #[cfg(not(feature = "logging-file"))]
        Some(_) => Err(anyhow!("Built without the logging-file feature")),
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .map_err(|err| anyhow!("Failed to set up logging: {err}")),
    }
}
