//! Close-approach export library.
//!
//! Serializes a linked [`NeoDatabase`](neo_model::NeoDatabase) subset to
//! two formats:
//!
//! - **CSV**: one row per approach with its NEO's fields flattened in
//! - **JSON**: an array of approach mappings, each with a nested `neo`
//!
//! Both writers accept any iterator of approaches, so the caller decides
//! the subset and its order; both refuse to serialize an approach that
//! was never linked to a NEO.

pub mod csv_export;
pub mod json_export;
pub mod record;

pub use csv_export::write_csv;
pub use json_export::write_json;
pub use record::{ApproachRecord, NeoRecord};
