//! Hierarchical export of close approaches.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use neo_model::{CloseApproach, NeoDatabase};
use tracing::info;

use crate::record::ApproachRecord;

/// Write the given close approaches to a JSON file as a flat array of
/// mappings, each carrying its nested `neo` mapping, in the given order.
///
/// Every approach must be linked, or the write fails before the file is
/// populated.
pub fn write_json<'a>(
    database: &NeoDatabase,
    results: impl IntoIterator<Item = &'a CloseApproach>,
    path: &Path,
) -> Result<()> {
    let records: Vec<ApproachRecord> = results
        .into_iter()
        .map(|approach| ApproachRecord::from_approach(database, approach))
        .collect::<Result<_, _>>()?;
    let file =
        File::create(path).with_context(|| format!("create json output: {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &records)
        .with_context(|| format!("write json output: {}", path.display()))?;
    info!(output = %path.display(), rows = records.len(), "wrote close approaches to json");
    Ok(())
}
