use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::read_existing;

pub fn cat<W: Write>(files: &[PathBuf], out: &mut W) -> anyhow::Result<()> {
    for file in files {
        print_file(file, out)?;
    }
    Ok(())
}

fn print_file<W: Write>(path: &Path, out: &mut W) -> anyhow::Result<()> {
    debug!("Printing {}", path.display());
    let content = read_existing(path)?;
    writeln!(out, "{content}")?;
    Ok(())
}
