//! Institution entity and the lookup table built from the institution dataset.

use serde::Serialize;
use std::collections::HashMap;

/// An institution that can be contacted through the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstitutionRecord {
    pub name: String,
    pub email: String,
}

impl InstitutionRecord {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Institutions keyed by exact name, keeping dataset order for display.
#[derive(Debug, Clone, Default)]
pub struct InstitutionDirectory {
    records: Vec<InstitutionRecord>,
    by_name: HashMap<String, usize>,
}

impl InstitutionDirectory {
    /// Builds a directory, returning the first duplicated name on conflict.
    pub fn from_records(records: Vec<InstitutionRecord>) -> Result<Self, String> {
        let mut by_name = HashMap::with_capacity(records.len());

        for (idx, record) in records.iter().enumerate() {
            if by_name.insert(record.name.clone(), idx).is_some() {
                return Err(record.name.clone());
            }
        }

        Ok(Self { records, by_name })
    }

    /// Exact-match lookup by institution name.
    pub fn find(&self, name: &str) -> Option<&InstitutionRecord> {
        self.by_name.get(name).map(|&idx| &self.records[idx])
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    pub fn records(&self) -> &[InstitutionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
