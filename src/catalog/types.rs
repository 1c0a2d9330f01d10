use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One row of the catalog: an appliance and up to six saving suggestions.
///
/// Field names on the wire follow the published API (`ID`, `ElectroDomestico`,
/// `Sugerencia 1`..`Sugerencia 6`); the CSV source uses underscores in the
/// suggestion headers instead of spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "ElectroDomestico")]
    pub appliance_name: String,
    #[serde(rename(serialize = "Sugerencia 1", deserialize = "Sugerencia_1"), default)]
    pub suggestion_1: String,
    #[serde(rename(serialize = "Sugerencia 2", deserialize = "Sugerencia_2"), default)]
    pub suggestion_2: String,
    #[serde(rename(serialize = "Sugerencia 3", deserialize = "Sugerencia_3"), default)]
    pub suggestion_3: String,
    #[serde(rename(serialize = "Sugerencia 4", deserialize = "Sugerencia_4"), default)]
    pub suggestion_4: String,
    #[serde(rename(serialize = "Sugerencia 5", deserialize = "Sugerencia_5"), default)]
    pub suggestion_5: String,
    #[serde(rename(serialize = "Sugerencia 6", deserialize = "Sugerencia_6"), default)]
    pub suggestion_6: String,
}

impl RecommendationRecord {
    /// The appliance name as used for matching.
    pub fn match_key(&self) -> String {
        self.appliance_name.trim().to_lowercase()
    }
}

/// Everything that can stop the catalog from loading. All of these are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog row: {0}")]
    Malformed(#[from] csv::Error),

    #[error("duplicate recommendation ID {0}")]
    DuplicateId(u32),

    #[error("catalog contains no appliance names")]
    EmptyCandidateSet,
}

/// Query string for the substring filter endpoint.
#[derive(Debug, Deserialize)]
pub struct ApplianceFilterParams {
    #[serde(rename = "Electro_Domestico")]
    pub appliance: String,
}

/// Body returned when a lookup by ID misses.
#[derive(Debug, Serialize, Deserialize)]
pub struct NotFoundResponse {
    #[serde(rename = "Detalle")]
    pub detail: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RecommendationLookup {
    Found(RecommendationRecord),
    NotFound(NotFoundResponse),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogStatsResponse {
    pub status: String,
    pub records: usize,
    pub appliances: usize,
}
