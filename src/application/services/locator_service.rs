//! Pantry locator service: one render cycle from criteria to view-models.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::application::views::{MapModel, MapSettings, TableModel, build_map, render_table};
use crate::domain::catalog::Catalog;
use crate::domain::entities::{Borough, PantryRecord};
use crate::domain::filter::{FilterCriteria, filter_records};
use crate::error::AppError;

/// Map and table rendered from the same filtered view.
#[derive(Debug, Clone)]
pub struct LocatorViews {
    pub criteria: FilterCriteria,
    pub map: MapModel,
    pub table: TableModel,
}

/// Filters the pantry catalog and builds the map and table views.
///
/// Stateless per request: every call takes the criteria explicitly and
/// recomputes the filtered view from the shared read-only catalog.
pub struct LocatorService {
    catalog: Arc<Catalog>,
    map_settings: MapSettings,
    default_borough: Borough,
}

impl LocatorService {
    pub fn new(catalog: Arc<Catalog>, map_settings: MapSettings, default_borough: Borough) -> Self {
        Self {
            catalog,
            map_settings,
            default_borough,
        }
    }

    /// Selection used before the user touches any filter.
    pub fn default_criteria(&self) -> FilterCriteria {
        FilterCriteria::default_for(self.default_borough)
    }

    pub fn default_borough(&self) -> Borough {
        self.default_borough
    }

    /// Boroughs offered as filter options.
    pub fn borough_options(&self) -> BTreeSet<Borough> {
        self.catalog.boroughs()
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&PantryRecord> {
        filter_records(self.catalog.pantries(), criteria)
    }

    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if a popup fails to render.
    pub fn map(&self, criteria: &FilterCriteria) -> Result<MapModel, AppError> {
        Ok(build_map(&self.filter(criteria), &self.map_settings)?)
    }

    pub fn table(&self, criteria: &FilterCriteria) -> TableModel {
        render_table(&self.filter(criteria))
    }

    /// Filters once and builds both views from the result.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if a popup fails to render.
    pub fn render(&self, criteria: FilterCriteria) -> Result<LocatorViews, AppError> {
        let view = self.filter(&criteria);
        let map = build_map(&view, &self.map_settings)?;
        let table = render_table(&view);

        tracing::debug!(
            boroughs = criteria.boroughs.len(),
            days = criteria.days.len(),
            matched = table.len(),
            plotted = map.markers.len(),
            "Locator views rendered"
        );

        Ok(LocatorViews {
            criteria,
            map,
            table,
        })
    }
}
