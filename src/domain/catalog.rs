//! Read-only tables loaded once at startup.

use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

use crate::domain::entities::{Borough, InstitutionDirectory, PantryRecord};

/// Both datasets, shared by every request for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Catalog {
    pantries: Vec<PantryRecord>,
    institutions: InstitutionDirectory,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    pub fn new(pantries: Vec<PantryRecord>, institutions: InstitutionDirectory) -> Self {
        Self {
            pantries,
            institutions,
            loaded_at: Utc::now(),
        }
    }

    pub fn pantries(&self) -> &[PantryRecord] {
        &self.pantries
    }

    pub fn institutions(&self) -> &InstitutionDirectory {
        &self.institutions
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Boroughs that have at least one pantry, used as filter options.
    pub fn boroughs(&self) -> BTreeSet<Borough> {
        self.pantries.iter().map(|p| p.borough).collect()
    }

    pub fn plottable_count(&self) -> usize {
        self.pantries.iter().filter(|p| p.is_plottable()).count()
    }
}
