//! Tabular projection of the filtered view.

use serde::Serialize;

use crate::domain::entities::{Borough, PantryRecord, Weekday};

pub const COLUMNS: [&str; 8] = [
    "Program",
    "Borough",
    "Days Open",
    "Hours",
    "Phone",
    "Address",
    "Latitude",
    "Longitude",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub program: String,
    pub borough: Borough,
    pub open_days: Vec<Weekday>,
    pub hours: String,
    pub phone: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl TableRow {
    /// Open days as short codes joined by commas, e.g. `mon, wed`.
    pub fn open_days_label(&self) -> String {
        self.open_days
            .iter()
            .map(|d| d.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl From<&PantryRecord> for TableRow {
    fn from(record: &PantryRecord) -> Self {
        Self {
            program: record.program.clone(),
            borough: record.borough,
            open_days: record.availability.open_days(),
            hours: record.hours.clone(),
            phone: record.phone.clone(),
            address: record.address.clone(),
            latitude: record.latitude,
            longitude: record.longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableModel {
    pub columns: [&'static str; 8],
    pub rows: Vec<TableRow>,
}

impl TableModel {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Projects the filtered view into table rows, one per record, same order.
pub fn render_table(view: &[&PantryRecord]) -> TableModel {
    TableModel {
        columns: COLUMNS,
        rows: view.iter().map(|r| TableRow::from(*r)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Availability;

    #[test]
    fn test_rows_mirror_view_including_unplottable() {
        let located = PantryRecord {
            program: "Located".to_string(),
            borough: Borough::Bronx,
            availability: Availability::open_on(&[Weekday::Mon, Weekday::Fri]),
            hours: "10-2".to_string(),
            phone: "718-555-0199".to_string(),
            address: "2 Grand Concourse".to_string(),
            latitude: Some(40.82),
            longitude: Some(-73.92),
        };
        let unlocated = PantryRecord {
            program: "Unlocated".to_string(),
            latitude: None,
            longitude: None,
            ..located.clone()
        };

        let table = render_table(&[&located, &unlocated]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].program, "Located");
        assert_eq!(table.rows[0].open_days_label(), "mon, fri");
        assert_eq!(table.rows[1].program, "Unlocated");
        assert_eq!(table.rows[1].latitude, None);
    }

    #[test]
    fn test_empty_view_has_headers_only() {
        let table = render_table(&[]);

        assert!(table.is_empty());
        assert_eq!(table.columns[0], "Program");
    }
}
