//! The near-Earth object entity.

use std::fmt;

use crate::error::{ModelError, Result};

/// Marker the NEO source uses for a hazardous object.
const HAZARD_YES: &str = "Y";
/// Marker the NEO source uses for a non-hazardous object.
const HAZARD_NO: &str = "N";

/// A near-Earth object.
///
/// Carries the primary designation (required, unique), the IAU name
/// (optional), the diameter in kilometers (`NAN` when unknown), and the
/// potentially-hazardous flag. The attached approach rows start empty and
/// are populated once by [`NeoDatabase`](crate::NeoDatabase) linking.
#[derive(Debug, Clone)]
pub struct NearEarthObject {
    designation: String,
    name: Option<String>,
    diameter_km: f64,
    hazardous: bool,
    /// Rows into the owning database's approach table.
    pub(crate) approach_rows: Vec<usize>,
}

impl NearEarthObject {
    /// Build a NEO from the four raw source fields.
    ///
    /// The designation must be non-empty. An empty name is stored as
    /// absent, never as an empty string. An empty diameter becomes the
    /// `NAN` unknown sentinel; any other value must parse as a float.
    /// The hazard marker is lenient: see [`parse_hazard_marker`].
    pub fn from_raw(designation: &str, name: &str, diameter: &str, hazardous: &str) -> Result<Self> {
        let designation = designation.trim();
        if designation.is_empty() {
            return Err(ModelError::validation(
                "designation",
                "must not be empty",
            ));
        }
        let name = name.trim();
        let name = (!name.is_empty()).then(|| name.to_owned());
        let diameter = diameter.trim();
        let diameter_km = if diameter.is_empty() {
            f64::NAN
        } else {
            diameter
                .parse::<f64>()
                .map_err(|err| ModelError::validation("diameter", format!("{diameter:?}: {err}")))?
        };
        Ok(Self {
            designation: designation.to_owned(),
            name,
            diameter_km,
            hazardous: parse_hazard_marker(hazardous),
            approach_rows: Vec::new(),
        })
    }

    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Diameter in kilometers; `NAN` when the source did not carry one.
    pub fn diameter_km(&self) -> f64 {
        self.diameter_km
    }

    pub fn hazardous(&self) -> bool {
        self.hazardous
    }

    /// Number of close approaches attached by linking.
    pub fn approach_count(&self) -> usize {
        self.approach_rows.len()
    }

    /// `"{designation} ({name})"` when a name is present, else the
    /// designation alone. Derived, never stored.
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({name})", self.designation),
            None => self.designation.clone(),
        }
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NEO {}", self.fullname())?;
        if !self.diameter_km.is_nan() {
            write!(f, " has a diameter of {:.3} km and", self.diameter_km)?;
        }
        if self.hazardous {
            write!(f, " is potentially hazardous")
        } else {
            write!(f, " is not potentially hazardous")
        }
    }
}

/// Map a raw hazard marker to the flag value.
///
/// Exactly two literals are recognized; everything else, including the
/// empty string the source frequently carries, defaults to `false`. This
/// leniency is the documented policy for the field, not an error path.
pub fn parse_hazard_marker(raw: &str) -> bool {
    match raw.trim() {
        HAZARD_YES => true,
        HAZARD_NO => false,
        _ => false,
    }
}
