use std::{fs::File, path::Path, sync::Mutex};

use anyhow::{anyhow, Context};
use tracing_subscriber::EnvFilter;

pub(super) fn create_file_tracer(filter: EnvFilter, log_file: &Path) -> anyhow::Result<()> {
    let log_file = File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("Failed to set up logging: {err}"))
}
