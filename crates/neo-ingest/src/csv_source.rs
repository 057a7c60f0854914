//! Field extraction from the tabular NEO source.
//!
//! The source is a wide CSV whose first row names its columns. Only four
//! of them matter here (`pdes`, `name`, `pha`, `diameter`); their
//! positions are resolved by name from the header once per file, never
//! assumed, because the upstream dataset has reordered columns between
//! releases. Extraction yields raw string tuples; entity construction is
//! a separate step.

use std::path::Path;

use csv::ReaderBuilder;
use neo_model::NearEarthObject;
use tracing::{debug, info};

use crate::error::{IngestError, Result};

const DESIGNATION_COLUMN: &str = "pdes";
const NAME_COLUMN: &str = "name";
const HAZARD_COLUMN: &str = "pha";
const DIAMETER_COLUMN: &str = "diameter";

/// The four raw fields of one NEO record, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNeo {
    pub designation: String,
    pub name: String,
    pub diameter: String,
    pub hazardous: String,
}

/// Resolved positions of the required columns within one file's header.
#[derive(Debug, Clone, Copy)]
struct NeoColumns {
    designation: usize,
    name: usize,
    hazardous: usize,
    diameter: usize,
}

impl NeoColumns {
    /// Scan a header row for the required column names.
    ///
    /// Fails with [`IngestError::Schema`] listing every name that could
    /// not be found, not just the first.
    fn resolve(source_name: &str, headers: &csv::StringRecord) -> Result<Self> {
        let position = |wanted: &str| {
            headers
                .iter()
                .position(|header| normalize_header(header) == wanted)
        };
        let mut missing = Vec::new();
        let mut find = |wanted: &str| match position(wanted) {
            Some(index) => index,
            None => {
                missing.push(wanted.to_owned());
                0
            }
        };
        let columns = Self {
            designation: find(DESIGNATION_COLUMN),
            name: find(NAME_COLUMN),
            hazardous: find(HAZARD_COLUMN),
            diameter: find(DIAMETER_COLUMN),
        };
        if missing.is_empty() {
            Ok(columns)
        } else {
            Err(IngestError::schema(source_name, missing))
        }
    }
}

fn normalize_header(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().to_owned()
}

fn cell(record: &csv::StringRecord, index: usize) -> String {
    record.get(index).map(normalize_cell).unwrap_or_default()
}

/// Read the raw NEO field tuples from a CSV file, in source order.
///
/// The file handle is scoped to this call; extra columns are ignored.
pub fn read_raw_neos(path: &Path) -> Result<Vec<RawNeo>> {
    let source_name = path.display().to_string();
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let columns = NeoColumns::resolve(&source_name, reader.headers()?)?;
    let mut raw = Vec::new();
    for record in reader.records() {
        let record = record?;
        raw.push(RawNeo {
            designation: cell(&record, columns.designation),
            name: cell(&record, columns.name),
            diameter: cell(&record, columns.diameter),
            hazardous: cell(&record, columns.hazardous),
        });
    }
    debug!(source = %source_name, records = raw.len(), "extracted raw NEO tuples");
    Ok(raw)
}

/// Load [`NearEarthObject`]s from a CSV file.
///
/// Fails fast on the first structurally invalid record; skipping
/// malformed rows would skew every count derived from the model.
pub fn load_neos(path: &Path) -> Result<Vec<NearEarthObject>> {
    let neos = read_raw_neos(path)?
        .iter()
        .map(|raw| {
            NearEarthObject::from_raw(&raw.designation, &raw.name, &raw.diameter, &raw.hazardous)
        })
        .collect::<neo_model::Result<Vec<_>>>()?;
    info!(source = %path.display(), neos = neos.len(), "loaded near-Earth objects");
    Ok(neos)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn resolves_columns_by_name_not_position() {
        let file = write_csv("diameter,pha,name,pdes,extra\n16.84,N,Eros,433,ignored\n");
        let raw = read_raw_neos(file.path()).unwrap();
        assert_eq!(
            raw,
            vec![RawNeo {
                designation: "433".to_owned(),
                name: "Eros".to_owned(),
                diameter: "16.84".to_owned(),
                hazardous: "N".to_owned(),
            }]
        );
    }

    #[test]
    fn missing_columns_are_all_reported() {
        let file = write_csv("pdes,name\n433,Eros\n");
        let err = read_raw_neos(file.path()).unwrap_err();
        match err {
            IngestError::Schema { missing, .. } => {
                assert_eq!(missing, vec!["pha".to_owned(), "diameter".to_owned()]);
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn missing_diameter_column_names_diameter() {
        let file = write_csv("pdes,name,pha\n433,Eros,N\n");
        let err = read_raw_neos(file.path()).unwrap_err();
        assert!(err.to_string().contains("diameter"));
    }

    #[test]
    fn loads_entities_with_lenient_defaults() {
        let file = write_csv("pdes,name,pha,diameter\n433,Eros,,\n2010 CJ188,,,\n");
        let neos = load_neos(file.path()).unwrap();
        assert_eq!(neos.len(), 2);
        assert_eq!(neos[0].name(), Some("Eros"));
        assert!(neos[0].diameter_km().is_nan());
        assert!(!neos[0].hazardous());
        assert_eq!(neos[1].name(), None);
    }

    #[test]
    fn invalid_record_aborts_the_load() {
        let file = write_csv("pdes,name,pha,diameter\n433,Eros,N,16.84\n,Nameless,N,\n");
        let err = load_neos(file.path()).unwrap_err();
        assert!(matches!(err, IngestError::Model(_)));
    }
}
