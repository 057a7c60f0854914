//! The close-approach entity.

use std::fmt;

use chrono::NaiveDateTime;

use crate::datetime::{format_approach_time, parse_approach_time};
use crate::error::{ModelError, Result};

/// One close approach to Earth by a near-Earth object.
///
/// All four source fields are required: timing and kinematics without a
/// value carry no meaning, so construction fails fast instead of
/// substituting defaults. The NEO back-reference starts unset and is
/// written exactly once by [`NeoDatabase`](crate::NeoDatabase) linking; an
/// unlinked approach is a valid transient state during loading.
#[derive(Debug, Clone)]
pub struct CloseApproach {
    designation: String,
    time: NaiveDateTime,
    distance_au: f64,
    velocity_km_s: f64,
    /// Row of the referenced NEO in the owning database, once linked.
    pub(crate) neo_row: Option<usize>,
}

impl CloseApproach {
    /// Build a close approach from the four raw source fields.
    pub fn from_raw(designation: &str, time: &str, distance: &str, velocity: &str) -> Result<Self> {
        let designation = required("designation", designation)?;
        let time = parse_approach_time(required("time", time)?)?;
        let distance_au = parse_float("distance", distance)?;
        let velocity_km_s = parse_float("velocity", velocity)?;
        Ok(Self {
            designation: designation.to_owned(),
            time,
            distance_au,
            velocity_km_s,
            neo_row: None,
        })
    }

    /// Designation of the referenced NEO (the foreign key).
    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn time(&self) -> NaiveDateTime {
        self.time
    }

    /// Nominal approach distance in astronomical units.
    pub fn distance_au(&self) -> f64 {
        self.distance_au
    }

    /// Relative velocity in kilometers per second.
    pub fn velocity_km_s(&self) -> f64 {
        self.velocity_km_s
    }

    /// Row of the linked NEO in the owning database, `None` until linked.
    pub fn neo_row(&self) -> Option<usize> {
        self.neo_row
    }

    /// Approach time at minute resolution, `YYYY-MM-DD HH:MM`.
    pub fn time_str(&self) -> String {
        format_approach_time(&self.time)
    }
}

impl fmt::Display for CloseApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "At {}, {:?} approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s",
            self.time_str(),
            self.designation,
            self.distance_au,
            self.velocity_km_s
        )
    }
}

fn required<'a>(field: &'static str, raw: &'a str) -> Result<&'a str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ModelError::validation(field, "must not be empty"))
    } else {
        Ok(trimmed)
    }
}

fn parse_float(field: &'static str, raw: &str) -> Result<f64> {
    let raw = required(field, raw)?;
    raw.parse::<f64>()
        .map_err(|err| ModelError::validation(field, format!("{raw:?}: {err}")))
}
