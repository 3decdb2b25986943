//! Snapshot labeling command

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Result;
use rf2_input_maps::{SnapshotSource, label_snapshot};
use tracing::info;

use crate::config::SortKey;
use crate::error::CliError;
use crate::output;

/// Read a snapshot from `input`, or stdin when `input` is `-`.
fn read_input(input: &Path) -> Result<String, CliError> {
    if input == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| CliError::io("<stdin>", e))?;
        Ok(buffer)
    } else {
        fs::read_to_string(input).map_err(|e| CliError::io(input, e))
    }
}

/// Execute label command
pub fn execute(input: &Path, source: SnapshotSource, sort: SortKey, json: bool) -> Result<()> {
    let snapshot = read_input(input)?;
    let mut labels = label_snapshot(source, &snapshot).map_err(CliError::from)?;
    sort.sort(&mut labels);

    info!(
        input = %input.display(),
        %source,
        bindings = labels.len(),
        "labeled snapshot"
    );
    output::print_labels(&labels, source, json);
    Ok(())
}
