use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use anyhow::Context;
use tracing::{debug, trace};

use crate::common::{
    errors::TextKitError,
    range::{merge_ranges, Adjacency, Range},
};

use super::open_existing;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelection {
    separator: char,
    ranges: Vec<Range>,
}

impl ColumnSelection {
    pub fn new<S: AsRef<str>>(
        separator: char,
        range_specs: &[S],
        adjacency: Adjacency,
    ) -> Result<Self, TextKitError> {
        let ranges = range_specs
            .iter()
            .map(|spec| parse_column_range(spec.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let ranges = merge_ranges(&ranges, adjacency)?;
        debug!("Selecting columns {:?}", ranges);

        Ok(Self { separator, ranges })
    }

    pub(crate) fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    /// Fields past the end of the line select nothing, so a range lying
    /// entirely beyond them contributes an empty piece.
    pub fn extract(&self, line: &str) -> String {
        let fields: Vec<&str> = line.split(self.separator).collect();
        let mut separator = [0u8; 4];
        let separator: &str = self.separator.encode_utf8(&mut separator);

        self.ranges
            .iter()
            .map(|range| {
                let start = range.start.min(fields.len());
                let stop = range.stop.min(fields.len());
                fields[start..stop].join(separator)
            })
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// Parses a 1-based inclusive `"a-b"` column range into a zero-based
/// half-open [`Range`].
pub fn parse_column_range(spec: &str) -> Result<Range, TextKitError> {
    let malformed = || TextKitError::MalformedRange(spec.to_string());

    let (first, last) = spec.split_once('-').ok_or_else(malformed)?;
    let first: usize = first.trim().parse().map_err(|_| malformed())?;
    let last: usize = last.trim().parse().map_err(|_| malformed())?;
    if first == 0 {
        return Err(malformed());
    }

    Range::new(first - 1, last)
}

pub fn split_range_list(list: &str) -> Vec<&str> {
    list.split(',').collect()
}

pub fn extract_columns<S: AsRef<str>>(
    separator: char,
    range_specs: &[S],
    line: &str,
) -> Result<String, TextKitError> {
    let selection = ColumnSelection::new(separator, range_specs, Adjacency::default())?;
    Ok(selection.extract(line))
}

pub fn cut<W: Write>(selection: &ColumnSelection, path: &Path, out: &mut W) -> anyhow::Result<()> {
    debug!("Cutting {} on columns {:?}", path.display(), selection.ranges());

    let reader = BufReader::new(open_existing(path)?);
    cut_reader(selection, reader, out).with_context(|| format!("Failed to cut {}", path.display()))
}

fn cut_reader<R: BufRead, W: Write>(
    selection: &ColumnSelection,
    reader: R,
    out: &mut W,
) -> anyhow::Result<()> {
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        trace!("line {}: {}", index, line);
        writeln!(out, "{}", selection.extract(&line))?;
    }
    Ok(())
}
