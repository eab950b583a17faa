//! Filter criteria as carried in query strings.
//!
//! Parameters are repeatable, which is what an HTML form with checkboxes
//! sends:
//!
//! ```text
//! ?filtered=1&borough=Manhattan&borough=Queens&day=mon&day=sat
//! ```
//!
//! A value may also hold a comma-separated list (`day=mon,sat`). When a key
//! is absent the default selection applies, unless `filtered` is present: a
//! submitted form with every box unticked means an empty selection.

use serde::Serialize;
use serde_json::json;

use crate::domain::entities::{Borough, Weekday};
use crate::domain::filter::FilterCriteria;
use crate::error::AppError;

const BOROUGH_KEY: &str = "borough";
const DAY_KEY: &str = "day";
const FILTERED_KEY: &str = "filtered";

/// Builds criteria from raw query pairs.
///
/// # Errors
///
/// Returns [`AppError::Validation`] listing every unknown borough or day.
pub fn criteria_from_query(
    pairs: &[(String, String)],
    defaults: &FilterCriteria,
) -> Result<FilterCriteria, AppError> {
    let submitted = pairs.iter().any(|(k, _)| k == FILTERED_KEY);
    let mut invalid = Vec::new();

    let boroughs = match values(pairs, BOROUGH_KEY) {
        Some(raw) => raw
            .into_iter()
            .filter_map(|v| v.parse::<Borough>().map_err(|e| invalid.push(e.to_string())).ok())
            .collect(),
        None if submitted => Default::default(),
        None => defaults.boroughs.clone(),
    };

    let days = match values(pairs, DAY_KEY) {
        Some(raw) => raw
            .into_iter()
            .filter_map(|v| v.parse::<Weekday>().map_err(|e| invalid.push(e.to_string())).ok())
            .collect(),
        None if submitted => Default::default(),
        None => defaults.days.clone(),
    };

    if !invalid.is_empty() {
        return Err(AppError::bad_request(
            "Invalid filter parameters",
            json!({ "invalid": invalid }),
        ));
    }

    Ok(FilterCriteria { boroughs, days })
}

/// All non-empty values for `key`, splitting comma lists; `None` if the key
/// never appears.
fn values<'a>(pairs: &'a [(String, String)], key: &str) -> Option<Vec<&'a str>> {
    let mut seen = false;
    let mut out = Vec::new();

    for (k, v) in pairs {
        if k == key {
            seen = true;
            out.extend(v.split(',').map(str::trim).filter(|s| !s.is_empty()));
        }
    }

    seen.then_some(out)
}

/// Serializes criteria back into a query string that round-trips through
/// [`criteria_from_query`], used to keep filters when switching pages.
pub fn criteria_to_query(criteria: &FilterCriteria) -> String {
    let mut parts = vec![format!("{FILTERED_KEY}=1")];
    parts.extend(
        criteria
            .boroughs
            .iter()
            .map(|b| format!("{BOROUGH_KEY}={}", b.as_str().replace(' ', "+"))),
    );
    parts.extend(criteria.days.iter().map(|d| format!("{DAY_KEY}={}", d.code())));
    parts.join("&")
}

/// Criteria echoed back in API responses.
#[derive(Debug, Serialize)]
pub struct CriteriaDto {
    pub boroughs: Vec<Borough>,
    pub days: Vec<Weekday>,
}

impl From<&FilterCriteria> for CriteriaDto {
    fn from(criteria: &FilterCriteria) -> Self {
        Self {
            boroughs: criteria.boroughs.iter().copied().collect(),
            days: criteria.days.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn defaults() -> FilterCriteria {
        FilterCriteria::default_for(Borough::Manhattan)
    }

    #[test]
    fn test_absent_keys_use_defaults() {
        let criteria = criteria_from_query(&[], &defaults()).unwrap();

        assert_eq!(criteria, defaults());
    }

    #[test]
    fn test_repeated_and_comma_values() {
        let criteria = criteria_from_query(
            &pairs(&[
                ("borough", "Brooklyn"),
                ("borough", "staten island"),
                ("day", "mon,thur"),
            ]),
            &defaults(),
        )
        .unwrap();

        assert_eq!(
            criteria,
            FilterCriteria::new(
                [Borough::Brooklyn, Borough::StatenIsland],
                [Weekday::Mon, Weekday::Thu]
            )
        );
    }

    #[test]
    fn test_submitted_form_without_boxes_is_empty() {
        let criteria =
            criteria_from_query(&pairs(&[("filtered", "1"), ("day", "mon")]), &defaults()).unwrap();

        assert!(criteria.boroughs.is_empty());
        assert_eq!(criteria.days.len(), 1);
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        let err = criteria_from_query(
            &pairs(&[("borough", "Hoboken"), ("day", "someday")]),
            &defaults(),
        )
        .unwrap_err();

        match err {
            AppError::Validation { details, .. } => {
                assert_eq!(details["invalid"].as_array().unwrap().len(), 2);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_query_round_trip() {
        let criteria = FilterCriteria::new(
            [Borough::StatenIsland, Borough::Queens],
            [Weekday::Sat],
        );

        let query = criteria_to_query(&criteria);
        assert_eq!(query, "filtered=1&borough=Queens&borough=Staten+Island&day=sat");

        let decoded: Vec<(String, String)> = query
            .split('&')
            .map(|kv| {
                let (k, v) = kv.split_once('=').unwrap();
                (k.to_string(), v.replace('+', " "))
            })
            .collect();
        assert_eq!(criteria_from_query(&decoded, &defaults()).unwrap(), criteria);
    }
}
