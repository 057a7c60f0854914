//! The linked in-memory model of NEOs and their close approaches.

use std::collections::HashMap;

use tracing::debug;

use crate::approach::CloseApproach;
use crate::neo::NearEarthObject;

/// All loaded NEOs and close approaches, cross-referenced by designation.
///
/// Both collections keep their source order; approaches in particular are
/// exported in file order. Linking happens once at construction: each
/// approach whose designation resolves in the NEO index gets its
/// back-reference set and is appended to that NEO's approach rows. An
/// approach whose designation has no matching NEO stays in the flat
/// sequence with the back-reference unset; the companion files are
/// allowed to disagree, so this is not an error.
///
/// Duplicate designations in the NEO source resolve last-write-wins: the
/// index keeps the final row for a repeated key.
#[derive(Debug, Default)]
pub struct NeoDatabase {
    neos: Vec<NearEarthObject>,
    approaches: Vec<CloseApproach>,
    by_designation: HashMap<String, usize>,
}

impl NeoDatabase {
    /// Build the database and run the single linking pass.
    pub fn new(neos: Vec<NearEarthObject>, approaches: Vec<CloseApproach>) -> Self {
        let mut by_designation = HashMap::with_capacity(neos.len());
        for (row, neo) in neos.iter().enumerate() {
            by_designation.insert(neo.designation().to_owned(), row);
        }
        let mut database = Self {
            neos,
            approaches,
            by_designation,
        };
        database.link();
        database
    }

    /// Attach every unlinked approach to its NEO, in approach order.
    ///
    /// Idempotent: an approach with its back-reference already set is
    /// skipped, so a second pass attaches nothing and duplicates nothing.
    fn link(&mut self) {
        let mut linked = 0usize;
        for row in 0..self.approaches.len() {
            if self.approaches[row].neo_row.is_some() {
                continue;
            }
            let Some(&neo_row) = self.by_designation.get(self.approaches[row].designation())
            else {
                continue;
            };
            self.approaches[row].neo_row = Some(neo_row);
            self.neos[neo_row].approach_rows.push(row);
            linked += 1;
        }
        debug!(
            neos = self.neos.len(),
            approaches = self.approaches.len(),
            linked,
            "linked close approaches"
        );
    }

    /// Look up a NEO by its primary designation.
    pub fn get_neo(&self, designation: &str) -> Option<&NearEarthObject> {
        self.by_designation
            .get(designation)
            .map(|&row| &self.neos[row])
    }

    /// Look up a NEO by its IAU name (linear scan; names are optional).
    pub fn get_neo_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        self.neos.iter().find(|neo| neo.name() == Some(name))
    }

    /// All NEOs, in source order.
    pub fn neos(&self) -> &[NearEarthObject] {
        &self.neos
    }

    /// All close approaches, in source order.
    pub fn approaches(&self) -> &[CloseApproach] {
        &self.approaches
    }

    /// Resolve an approach's back-reference, `None` when unlinked.
    pub fn neo_for(&self, approach: &CloseApproach) -> Option<&NearEarthObject> {
        approach.neo_row.map(|row| &self.neos[row])
    }

    /// The approaches attached to a NEO, in source order.
    pub fn approaches_of<'a>(
        &'a self,
        neo: &'a NearEarthObject,
    ) -> impl Iterator<Item = &'a CloseApproach> {
        neo.approach_rows.iter().map(|&row| &self.approaches[row])
    }

    /// Count of approaches left unlinked after the linking pass.
    pub fn unlinked_count(&self) -> usize {
        self.approaches
            .iter()
            .filter(|approach| approach.neo_row.is_none())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neo(designation: &str, name: &str) -> NearEarthObject {
        NearEarthObject::from_raw(designation, name, "", "N").unwrap()
    }

    fn approach(designation: &str, time: &str) -> CloseApproach {
        CloseApproach::from_raw(designation, time, "0.5", "10.0").unwrap()
    }

    #[test]
    fn links_approaches_to_their_neo_in_order() {
        let db = NeoDatabase::new(
            vec![neo("433", "Eros"), neo("2010 CJ188", "")],
            vec![
                approach("2010 CJ188", "2010-Feb-08 09:26"),
                approach("433", "1900-Dec-27 01:30"),
                approach("2010 CJ188", "2024-Aug-17 18:03"),
            ],
        );
        let cj = db.get_neo("2010 CJ188").unwrap();
        let times: Vec<String> = db.approaches_of(cj).map(|a| a.time_str()).collect();
        assert_eq!(times, vec!["2010-02-08 09:26", "2024-08-17 18:03"]);
        assert_eq!(db.get_neo("433").unwrap().approach_count(), 1);
        assert_eq!(db.unlinked_count(), 0);
    }

    #[test]
    fn unmatched_designation_stays_unlinked() {
        let db = NeoDatabase::new(
            vec![neo("433", "Eros")],
            vec![approach("99942", "2029-Apr-13 21:46")],
        );
        assert_eq!(db.approaches().len(), 1);
        assert!(db.neo_for(&db.approaches()[0]).is_none());
        assert_eq!(db.unlinked_count(), 1);
        assert_eq!(db.get_neo("433").unwrap().approach_count(), 0);
    }

    #[test]
    fn relinking_attaches_nothing_new() {
        let mut db = NeoDatabase::new(
            vec![neo("433", "Eros")],
            vec![
                approach("433", "1900-Dec-27 01:30"),
                approach("433", "1907-Jan-17 06:54"),
            ],
        );
        db.link();
        let eros = db.get_neo("433").unwrap();
        assert_eq!(eros.approach_count(), 2);
        let rows: Vec<usize> = eros.approach_rows.clone();
        assert_eq!(rows, vec![0, 1]);
    }

    #[test]
    fn duplicate_designation_resolves_to_last_row() {
        let first = NearEarthObject::from_raw("433", "Eros", "16.84", "N").unwrap();
        let second = NearEarthObject::from_raw("433", "", "", "Y").unwrap();
        let db = NeoDatabase::new(vec![first, second], vec![approach("433", "1900-Dec-27 01:30")]);
        let picked = db.get_neo("433").unwrap();
        assert!(picked.hazardous());
        assert_eq!(picked.name(), None);
        assert_eq!(picked.approach_count(), 1);
    }

    #[test]
    fn name_lookup_skips_unnamed_neos() {
        let db = NeoDatabase::new(vec![neo("433", "Eros"), neo("2010 CJ188", "")], vec![]);
        assert_eq!(db.get_neo_by_name("Eros").unwrap().designation(), "433");
        assert!(db.get_neo_by_name("").is_none());
    }
}
