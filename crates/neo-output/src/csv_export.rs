//! Tabular export of close approaches.

use std::path::Path;

use anyhow::{Context, Result};
use neo_model::{CloseApproach, NeoDatabase};
use tracing::info;

use crate::record::ApproachRecord;

/// Output columns, fixed order.
const HEADER: [&str; 7] = [
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];

/// Write the given close approaches to a CSV file, one row per approach
/// in the given order.
///
/// Numeric values go out through `Display`, which keeps full round-trip
/// precision; an unknown diameter appears as `NaN`. Every approach must
/// be linked, or the write fails.
pub fn write_csv<'a>(
    database: &NeoDatabase,
    results: impl IntoIterator<Item = &'a CloseApproach>,
    path: &Path,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create csv output: {}", path.display()))?;
    writer.write_record(HEADER)?;
    let mut rows = 0usize;
    for approach in results {
        let record = ApproachRecord::from_approach(database, approach)?;
        writer.write_record([
            record.datetime_utc,
            record.distance_au.to_string(),
            record.velocity_km_s.to_string(),
            record.neo.designation,
            record.neo.name,
            record.neo.diameter_km.to_string(),
            record.neo.hazardous.to_string(),
        ])?;
        rows += 1;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv output: {}", path.display()))?;
    info!(output = %path.display(), rows, "wrote close approaches to csv");
    Ok(())
}

#[cfg(test)]
mod tests {
    use neo_model::{CloseApproach, NearEarthObject};

    use super::*;

    fn sample_database() -> NeoDatabase {
        NeoDatabase::new(
            vec![NearEarthObject::from_raw("433", "Eros", "", "N").unwrap()],
            vec![
                CloseApproach::from_raw("433", "1900-Jan-01 00:00", "0.0921795123769547", "10.0")
                    .unwrap(),
            ],
        )
    }

    #[test]
    fn writes_fixed_header_and_full_precision_rows() {
        let db = sample_database();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        write_csv(&db, db.approaches(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some(
                "datetime_utc,distance_au,velocity_km_s,designation,name,diameter_km,potentially_hazardous"
            )
        );
        assert_eq!(
            lines.next(),
            Some("1900-01-01 00:00,0.0921795123769547,10,433,Eros,NaN,false")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn unlinked_approach_fails_the_write() {
        let db = NeoDatabase::new(
            Vec::new(),
            vec![CloseApproach::from_raw("99942", "2029-Apr-13 21:46", "0.1", "7.4").unwrap()],
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        let err = write_csv(&db, db.approaches(), &path).unwrap_err();
        assert!(err.to_string().contains("not linked"));
    }
}
