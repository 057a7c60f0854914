//! Flat export records for the two entity kinds.
//!
//! These are the serialized views of the in-memory entities. The one
//! deliberate asymmetry with the model lives here: an absent NEO name is
//! folded back to the empty string. Diameter stays a float, so the `NAN`
//! unknown sentinel is preserved in the record (JSON itself has no NaN;
//! `serde_json` renders it as `null` on the wire).

use neo_model::{CloseApproach, ModelError, NearEarthObject, NeoDatabase};
use serde::Serialize;

/// Serialized view of a [`NearEarthObject`].
#[derive(Debug, Clone, Serialize)]
pub struct NeoRecord {
    pub designation: String,
    pub name: String,
    pub diameter_km: f64,
    pub hazardous: bool,
}

impl NeoRecord {
    pub fn from_neo(neo: &NearEarthObject) -> Self {
        Self {
            designation: neo.designation().to_owned(),
            name: neo.name().unwrap_or_default().to_owned(),
            diameter_km: neo.diameter_km(),
            hazardous: neo.hazardous(),
        }
    }
}

/// Serialized view of a [`CloseApproach`] together with its linked NEO.
#[derive(Debug, Clone, Serialize)]
pub struct ApproachRecord {
    pub datetime_utc: String,
    pub distance_au: f64,
    pub velocity_km_s: f64,
    pub neo: NeoRecord,
}

impl ApproachRecord {
    /// Build the record for one approach, resolving the back-reference
    /// through the owning database.
    ///
    /// Export is only meaningful on a linked model, so an approach with
    /// no attached NEO is an error rather than an empty placeholder.
    pub fn from_approach(
        database: &NeoDatabase,
        approach: &CloseApproach,
    ) -> Result<Self, ModelError> {
        let neo = database
            .neo_for(approach)
            .ok_or_else(|| ModelError::Linkage {
                designation: approach.designation().to_owned(),
            })?;
        Ok(Self {
            datetime_utc: approach.time_str(),
            distance_au: approach.distance_au(),
            velocity_km_s: approach.velocity_km_s(),
            neo: NeoRecord::from_neo(neo),
        })
    }
}
