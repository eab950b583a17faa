//! Sidebar filter panel shared by the map and table pages.

use crate::api::dto::filter::criteria_to_query;
use crate::domain::entities::{Borough, Weekday};
use crate::domain::filter::FilterCriteria;
use crate::state::AppState;

pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

/// Checkbox state for the current request plus the query string that
/// reproduces it, so links between pages keep the selection.
pub struct FilterPanel {
    pub boroughs: Vec<FilterOption>,
    pub days: Vec<FilterOption>,
    pub query: String,
}

impl FilterPanel {
    /// Offers every borough with pantries plus any already selected, so a
    /// selection with no pantries can still be seen and unticked.
    pub fn new(state: &AppState, criteria: &FilterCriteria) -> Self {
        let mut options = state.locator.borough_options();
        options.extend(criteria.boroughs.iter().copied());

        let boroughs = options
            .into_iter()
            .map(|b: Borough| FilterOption {
                value: b.as_str(),
                label: b.as_str(),
                checked: criteria.boroughs.contains(&b),
            })
            .collect();

        let days = Weekday::ALL
            .into_iter()
            .map(|d| FilterOption {
                value: d.code(),
                label: d.label(),
                checked: criteria.days.contains(&d),
            })
            .collect();

        Self {
            boroughs,
            days,
            query: criteria_to_query(criteria),
        }
    }
}
