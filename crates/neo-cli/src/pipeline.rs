//! Load, link, and export orchestration.

use std::path::Path;

use anyhow::{Context, Result, bail};
use neo_ingest::{load_approaches, load_neos};
use neo_model::NeoDatabase;
use neo_output::{write_csv, write_json};
use tracing::{info, warn};

/// Load both sources and build the linked database.
///
/// The two loads are independent read passes; any failure in either
/// aborts the whole load and no partial model is returned.
pub fn load_database(neo_csv: &Path, cad_json: &Path) -> Result<NeoDatabase> {
    let neos = load_neos(neo_csv)
        .with_context(|| format!("load near-Earth objects: {}", neo_csv.display()))?;
    let approaches = load_approaches(cad_json)
        .with_context(|| format!("load close approaches: {}", cad_json.display()))?;
    let database = NeoDatabase::new(neos, approaches);
    info!(
        neos = database.neos().len(),
        approaches = database.approaches().len(),
        "built linked database"
    );
    let unlinked = database.unlinked_count();
    if unlinked > 0 {
        warn!(unlinked, "close approaches reference NEOs absent from the NEO source");
    }
    Ok(database)
}

/// Write every approach in the database to `outfile`, choosing the
/// format from the file extension.
pub fn export_all(database: &NeoDatabase, outfile: &Path) -> Result<()> {
    match outfile.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => write_csv(database, database.approaches(), outfile),
        Some("json") => write_json(database, database.approaches(), outfile),
        _ => bail!(
            "cannot infer output format from {:?}: expected a .csv or .json extension",
            outfile.display().to_string()
        ),
    }
}
