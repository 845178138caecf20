//! The dataset root handled by the enrichment tooling.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CountryId
// ---------------------------------------------------------------------------

/// Key of the `countries` map (e.g. `japan`, `new_zealand`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryId(pub String);

impl std::fmt::Display for CountryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CountryId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// CountryRecord
// ---------------------------------------------------------------------------

/// A country entry. No schema is defined, so the record stays opaque JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryRecord(pub serde_json::Value);

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

/// Root of the enriched dataset: `{ "countries": { ... } }`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub countries: BTreeMap<CountryId, CountryRecord>,
}

impl Dataset {
    /// An empty dataset root.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn country_count(&self) -> usize {
        self.countries.len()
    }
}
