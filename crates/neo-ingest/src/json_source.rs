//! Field extraction from the hierarchical close-approach source.
//!
//! The source is a JSON document of the form
//! `{ "fields": ["des", "cd", ...], "data": [[...], ...] }` where every
//! record in `data` has the shape declared by `fields`. The four field
//! names needed here (`des`, `cd`, `dist`, `v_rel`) are resolved from
//! the declaration once per document, never assumed by position.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use neo_model::CloseApproach;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{IngestError, Result};

const DESIGNATION_FIELD: &str = "des";
const CALENDAR_DATE_FIELD: &str = "cd";
const DISTANCE_FIELD: &str = "dist";
const VELOCITY_FIELD: &str = "v_rel";

/// The four raw fields of one close-approach record, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawApproach {
    pub designation: String,
    pub time: String,
    pub distance: String,
    pub velocity: String,
}

/// The close-approach document: a field-name declaration plus records
/// shaped by it. Extra top-level keys are ignored.
#[derive(Debug, Deserialize)]
struct ApproachDocument {
    fields: Vec<String>,
    data: Vec<Vec<Value>>,
}

/// Resolved positions of the required fields within one document.
#[derive(Debug, Clone, Copy)]
struct ApproachFields {
    designation: usize,
    time: usize,
    distance: usize,
    velocity: usize,
}

impl ApproachFields {
    fn resolve(source_name: &str, fields: &[String]) -> Result<Self> {
        let mut missing = Vec::new();
        let mut find = |wanted: &str| match fields.iter().position(|field| field == wanted) {
            Some(index) => index,
            None => {
                missing.push(wanted.to_owned());
                0
            }
        };
        let resolved = Self {
            designation: find(DESIGNATION_FIELD),
            time: find(CALENDAR_DATE_FIELD),
            distance: find(DISTANCE_FIELD),
            velocity: find(VELOCITY_FIELD),
        };
        if missing.is_empty() {
            Ok(resolved)
        } else {
            Err(IngestError::schema(source_name, missing))
        }
    }
}

/// Coerce one data cell to its raw string form.
///
/// The dataset mostly carries strings, but numbers appear in some
/// releases and nulls stand in for missing values. Null becomes the
/// empty string, which the entity constructor then rejects for the
/// required approach fields.
fn cell(record: &[Value], index: usize) -> String {
    match record.get(index) {
        Some(Value::String(text)) => text.trim().to_owned(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Read the raw close-approach field tuples from a JSON file, in source
/// order. The file handle is scoped to this call.
pub fn read_raw_approaches(path: &Path) -> Result<Vec<RawApproach>> {
    let source_name = path.display().to_string();
    let file = File::open(path)?;
    let document: ApproachDocument = serde_json::from_reader(BufReader::new(file))?;
    let fields = ApproachFields::resolve(&source_name, &document.fields)?;
    let raw: Vec<RawApproach> = document
        .data
        .iter()
        .map(|record| RawApproach {
            designation: cell(record, fields.designation),
            time: cell(record, fields.time),
            distance: cell(record, fields.distance),
            velocity: cell(record, fields.velocity),
        })
        .collect();
    debug!(source = %source_name, records = raw.len(), "extracted raw approach tuples");
    Ok(raw)
}

/// Load [`CloseApproach`]es from a JSON file, failing fast on the first
/// invalid record.
pub fn load_approaches(path: &Path) -> Result<Vec<CloseApproach>> {
    let approaches = read_raw_approaches(path)?
        .iter()
        .map(|raw| {
            CloseApproach::from_raw(&raw.designation, &raw.time, &raw.distance, &raw.velocity)
        })
        .collect::<neo_model::Result<Vec<_>>>()?;
    info!(source = %path.display(), approaches = approaches.len(), "loaded close approaches");
    Ok(approaches)
}
