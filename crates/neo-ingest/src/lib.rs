//! Extract near-Earth object and close-approach data from CSV and JSON
//! source files.
//!
//! Both extractors resolve the columns they need by name from the
//! source's own declaration (CSV header row, JSON `fields` array) before
//! reading any record, and yield raw string tuples in source order. The
//! `load_*` functions run extraction and entity construction in one
//! call, failing fast on schema or validation problems.

pub mod csv_source;
pub mod error;
pub mod json_source;

pub use csv_source::{RawNeo, load_neos, read_raw_neos};
pub use error::{IngestError, Result};
pub use json_source::{RawApproach, load_approaches, read_raw_approaches};
