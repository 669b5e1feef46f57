use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{anyhow, Context};

use crate::common::errors::TextKitError;

pub mod cat;
pub mod cut;
pub mod stats;

/// Only a path that does not exist is [`TextKitError::FileNotFound`].
pub(crate) fn open_existing(path: &Path) -> anyhow::Result<File> {
    File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => anyhow!(TextKitError::FileNotFound(path.to_path_buf())),
        _ => anyhow::Error::new(err).context(format!("Failed to open {}", path.display())),
    })
}

pub(crate) fn read_existing(path: &Path) -> anyhow::Result<String> {
    let mut content = String::new();
    open_existing(path)?
        .read_to_string(&mut content)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(content)
}
