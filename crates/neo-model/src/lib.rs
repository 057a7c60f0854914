//! Data model for near-Earth objects and their close approaches.
//!
//! A [`NearEarthObject`] carries a unique primary designation, an
//! optional IAU name, an optional diameter, and a hazard flag. A
//! [`CloseApproach`] carries an approach time, nominal distance, and
//! relative velocity, and references one NEO by designation. The
//! [`NeoDatabase`] owns both collections and cross-links them: each
//! approach gains a back-reference to its NEO and each NEO gains the
//! ordered list of its approaches.
//!
//! Construction tolerates the quirks of the source data — missing names,
//! unknown diameters, absent hazard markers — with documented defaults,
//! while required approach fields fail fast instead.

pub mod approach;
pub mod database;
pub mod datetime;
pub mod error;
pub mod neo;

pub use approach::CloseApproach;
pub use database::NeoDatabase;
pub use datetime::{format_approach_time, parse_approach_time};
pub use error::{ModelError, Result};
pub use neo::{NearEarthObject, parse_hazard_marker};
