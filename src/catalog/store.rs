use super::types::{CatalogError, RecommendationRecord};
use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read-only catalog of recommendations plus the derived set of appliance names.
///
/// Built once at startup. The name set is ordered so that anything iterating it
/// (the fuzzy resolver in particular) sees the same sequence on every run.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    records: Vec<RecommendationRecord>,
    appliance_names: BTreeSet<String>,
}

impl CatalogStore {
    /// Validates `records` and derives the appliance name set.
    ///
    /// Fails on duplicate IDs or when no record carries a non-blank appliance name.
    pub fn from_records(records: Vec<RecommendationRecord>) -> Result<Self, CatalogError> {
        let mut seen_ids = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen_ids.insert(record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
        }

        let appliance_names: BTreeSet<String> = records
            .iter()
            .map(RecommendationRecord::match_key)
            .filter(|name| !name.is_empty())
            .collect();

        if appliance_names.is_empty() {
            return Err(CatalogError::EmptyCandidateSet);
        }

        Ok(Self {
            records,
            appliance_names,
        })
    }

    /// Parses CSV with a header row (`ID`, `ElectroDomestico`, `Sugerencia_1`..`Sugerencia_6`).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let records = csv_reader
            .deserialize::<RecommendationRecord>()
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_records(records)
    }

    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    pub fn all_records(&self) -> &[RecommendationRecord] {
        &self.records
    }

    pub fn appliance_names(&self) -> &BTreeSet<String> {
        &self.appliance_names
    }

    pub fn find_by_id(&self, id: u32) -> Option<&RecommendationRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Records whose appliance name contains `fragment`, ignoring case.
    pub fn find_by_name_fragment(&self, fragment: &str) -> Vec<RecommendationRecord> {
        let needle = fragment.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.appliance_name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Records whose lower-cased appliance name equals `label` exactly.
    pub fn records_for_appliance(&self, label: &str) -> Vec<RecommendationRecord> {
        self.records
            .iter()
            .filter(|record| record.match_key() == label)
            .cloned()
            .collect()
    }
}
