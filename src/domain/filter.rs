//! Filter engine deriving the visible pantry subset from user criteria.

use std::collections::BTreeSet;

use crate::domain::entities::{Borough, PantryRecord, Weekday};

/// Borough and day selections for one render cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub boroughs: BTreeSet<Borough>,
    pub days: BTreeSet<Weekday>,
}

impl FilterCriteria {
    pub fn new(
        boroughs: impl IntoIterator<Item = Borough>,
        days: impl IntoIterator<Item = Weekday>,
    ) -> Self {
        Self {
            boroughs: boroughs.into_iter().collect(),
            days: days.into_iter().collect(),
        }
    }

    /// Initial selection of the UI: one borough, every day of the week.
    pub fn default_for(borough: Borough) -> Self {
        Self::new([borough], Weekday::ALL)
    }

    /// Borough is selected and the pantry is open on at least one selected day.
    pub fn matches(&self, record: &PantryRecord) -> bool {
        self.boroughs.contains(&record.borough)
            && self.days.iter().any(|day| record.availability.is_open(*day))
    }

    pub fn is_empty(&self) -> bool {
        self.boroughs.is_empty() || self.days.is_empty()
    }
}

/// Returns the records matching `criteria`, preserving input order.
pub fn filter_records<'a>(
    records: &'a [PantryRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a PantryRecord> {
    if criteria.is_empty() {
        return Vec::new();
    }

    records.iter().filter(|r| criteria.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Availability;

    fn pantry(name: &str, borough: Borough, days: &[Weekday]) -> PantryRecord {
        PantryRecord {
            program: name.to_string(),
            borough,
            availability: Availability::open_on(days),
            hours: "9am-5pm".to_string(),
            phone: "555-0100".to_string(),
            address: format!("{name} St"),
            latitude: Some(40.7),
            longitude: Some(-73.9),
        }
    }

    fn scenario() -> Vec<PantryRecord> {
        vec![
            pantry("M1", Borough::Manhattan, &[Weekday::Mon, Weekday::Wed]),
            pantry("B1", Borough::Brooklyn, &[Weekday::Tue, Weekday::Thu]),
            pantry("M2", Borough::Manhattan, &[Weekday::Mon, Weekday::Wed]),
            pantry("B2", Borough::Brooklyn, &[Weekday::Tue, Weekday::Thu]),
            pantry("M3", Borough::Manhattan, &[Weekday::Mon, Weekday::Wed]),
        ]
    }

    fn names(view: &[&PantryRecord]) -> Vec<String> {
        view.iter().map(|r| r.program.clone()).collect()
    }

    #[test]
    fn test_manhattan_on_monday_keeps_all_manhattan_in_order() {
        let records = scenario();
        let criteria = FilterCriteria::new([Borough::Manhattan], [Weekday::Mon]);

        let view = filter_records(&records, &criteria);

        assert_eq!(names(&view), vec!["M1", "M2", "M3"]);
    }

    #[test]
    fn test_brooklyn_on_monday_is_empty() {
        let records = scenario();
        let criteria = FilterCriteria::new([Borough::Brooklyn], [Weekday::Mon]);

        assert!(filter_records(&records, &criteria).is_empty());
    }

    #[test]
    fn test_empty_selections_yield_empty_view() {
        let records = scenario();

        let no_boroughs = FilterCriteria::new(std::iter::empty(), Weekday::ALL);
        let no_days = FilterCriteria::new(Borough::ALL, std::iter::empty());

        assert!(filter_records(&records, &no_boroughs).is_empty());
        assert!(filter_records(&records, &no_days).is_empty());
        assert!(filter_records(&records, &FilterCriteria::default()).is_empty());
    }

    #[test]
    fn test_only_selected_days_participate() {
        let records = vec![pantry("Weekend", Borough::Queens, &[Weekday::Sat, Weekday::Sun])];
        let weekdays = FilterCriteria::new(
            [Borough::Queens],
            [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri],
        );

        assert!(filter_records(&records, &weekdays).is_empty());

        let saturday = FilterCriteria::new([Borough::Queens], [Weekday::Sat]);
        assert_eq!(filter_records(&records, &saturday).len(), 1);
    }

    #[test]
    fn test_every_result_satisfies_criteria() {
        let records = scenario();
        let criteria = FilterCriteria::new(
            [Borough::Brooklyn, Borough::Manhattan],
            [Weekday::Thu],
        );

        let view = filter_records(&records, &criteria);

        assert_eq!(names(&view), vec!["B1", "B2"]);
        for record in view {
            assert!(criteria.boroughs.contains(&record.borough));
            assert!(criteria.days.iter().any(|d| record.availability.is_open(*d)));
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = scenario();
        let criteria = FilterCriteria::new([Borough::Manhattan, Borough::Brooklyn], [Weekday::Wed]);

        let once: Vec<PantryRecord> = filter_records(&records, &criteria)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_records(&once, &criteria);

        assert_eq!(names(&twice), vec!["M1", "M2", "M3"]);
        assert_eq!(twice.len(), once.len());
    }

    #[test]
    fn test_default_criteria_selects_all_days() {
        let criteria = FilterCriteria::default_for(Borough::Manhattan);

        assert_eq!(criteria.days.len(), 7);
        assert_eq!(criteria.boroughs.len(), 1);
        assert!(criteria.boroughs.contains(&Borough::Manhattan));
    }
}
