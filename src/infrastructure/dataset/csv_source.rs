//! CSV-backed data source for the pantry and institution datasets.

use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::error::DataLoadError;
use crate::domain::catalog::Catalog;
use crate::domain::entities::{
    Availability, Borough, InstitutionDirectory, InstitutionRecord, PantryRecord, Weekday,
};

const PROGRAM: &str = "PROGRAM";
const HOURS: &str = "HOURS";
const PHONE: &str = "ORG PHONE";
const ADDRESS: &str = "FULL ADDRESS";
const LATITUDE: &str = "LATITUDE";
const LONGITUDE: &str = "LONGITUDE";
const BOROUGH: &str = "BOROUGH";
const SCHOOL: &str = "School";
const EMAIL: &str = "Email";

/// Loads both datasets from CSV files on disk.
#[derive(Debug, Clone)]
pub struct CsvDataSource {
    pantry_path: PathBuf,
    institution_path: PathBuf,
}

impl CsvDataSource {
    pub fn new(pantry_path: impl Into<PathBuf>, institution_path: impl Into<PathBuf>) -> Self {
        Self {
            pantry_path: pantry_path.into(),
            institution_path: institution_path.into(),
        }
    }

    /// Reads and validates both files.
    ///
    /// # Errors
    ///
    /// Returns [`DataLoadError`] if a file is missing or unreadable, is not
    /// valid CSV, lacks a required column, or holds an invalid borough or day
    /// flag. Institution names must be unique.
    pub fn load(&self) -> Result<Catalog, DataLoadError> {
        let pantries = read_pantries(open(&self.pantry_path)?, &display(&self.pantry_path))?;
        let institutions = read_institutions(
            open(&self.institution_path)?,
            &display(&self.institution_path),
        )?;

        let catalog = Catalog::new(pantries, institutions);
        info!(
            pantries = catalog.pantries().len(),
            plottable = catalog.plottable_count(),
            institutions = catalog.institutions().len(),
            "Datasets loaded"
        );

        Ok(catalog)
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

fn open(path: &Path) -> Result<File, DataLoadError> {
    File::open(path).map_err(|source| DataLoadError::Io {
        source_name: display(path),
        source,
    })
}

/// Parses the pantry dataset.
///
/// Headers are matched case-insensitively. Day columns are `mon`..`sun`,
/// with `thur` accepted for Thursday. Unusable coordinates are dropped to
/// `None` so the record stays listed but is not plotted.
pub fn read_pantries<R: Read>(
    reader: R,
    source_name: &str,
) -> Result<Vec<PantryRecord>, DataLoadError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let csv_err = |source| DataLoadError::Csv {
        source_name: source_name.to_string(),
        source,
    };

    let headers = reader.headers().map_err(csv_err)?.clone();
    let columns = PantryColumns::resolve(&headers, source_name)?;

    let mut pantries = Vec::new();
    for row in reader.records() {
        let row = row.map_err(csv_err)?;
        pantries.push(columns.parse(&row, source_name)?);
    }

    debug!(source = source_name, rows = pantries.len(), "Pantry dataset parsed");
    Ok(pantries)
}

/// Parses the institution dataset (`School`, `Email`).
pub fn read_institutions<R: Read>(
    reader: R,
    source_name: &str,
) -> Result<InstitutionDirectory, DataLoadError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let csv_err = |source| DataLoadError::Csv {
        source_name: source_name.to_string(),
        source,
    };

    let headers = reader.headers().map_err(csv_err)?.clone();
    let school = require(&headers, &[SCHOOL], source_name)?;
    let email = require(&headers, &[EMAIL], source_name)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(csv_err)?;
        records.push(InstitutionRecord::new(
            field(&row, school),
            field(&row, email),
        ));
    }

    InstitutionDirectory::from_records(records).map_err(|name| {
        DataLoadError::DuplicateInstitution {
            source_name: source_name.to_string(),
            name,
        }
    })
}

/// Column positions of the pantry dataset, resolved once from the header row.
struct PantryColumns {
    program: usize,
    hours: usize,
    phone: usize,
    address: usize,
    latitude: usize,
    longitude: usize,
    borough: usize,
    days: [(Weekday, usize); 7],
}

impl PantryColumns {
    fn resolve(headers: &StringRecord, source_name: &str) -> Result<Self, DataLoadError> {
        let mut days = [(Weekday::Mon, 0); 7];
        for (slot, day) in days.iter_mut().zip(Weekday::ALL) {
            let column = match day {
                Weekday::Thu => require(headers, &["thu", "thur"], source_name)?,
                _ => require(headers, &[day.code()], source_name)?,
            };
            *slot = (day, column);
        }

        Ok(Self {
            program: require(headers, &[PROGRAM], source_name)?,
            hours: require(headers, &[HOURS], source_name)?,
            phone: require(headers, &[PHONE], source_name)?,
            address: require(headers, &[ADDRESS], source_name)?,
            latitude: require(headers, &[LATITUDE], source_name)?,
            longitude: require(headers, &[LONGITUDE], source_name)?,
            borough: require(headers, &[BOROUGH], source_name)?,
            days,
        })
    }

    fn parse(&self, row: &StringRecord, source_name: &str) -> Result<PantryRecord, DataLoadError> {
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let invalid = |column: &str, value: &str| DataLoadError::InvalidValue {
            source_name: source_name.to_string(),
            line,
            column: column.to_string(),
            value: value.to_string(),
        };

        let borough_raw = field(row, self.borough);
        let borough: Borough = borough_raw
            .parse()
            .map_err(|_| invalid(BOROUGH, &borough_raw))?;

        let mut availability = Availability::default();
        for (day, column) in self.days {
            let raw = field(row, column);
            let open = parse_flag(&raw).ok_or_else(|| invalid(day.code(), &raw))?;
            availability.set(day, open);
        }

        let program = field(row, self.program);
        let latitude = parse_coordinate(&field(row, self.latitude), LATITUDE, &program, line);
        let longitude = parse_coordinate(&field(row, self.longitude), LONGITUDE, &program, line);

        Ok(PantryRecord {
            program,
            borough,
            availability,
            hours: field(row, self.hours),
            phone: field(row, self.phone),
            address: field(row, self.address),
            latitude,
            longitude,
        })
    }
}

fn require(headers: &StringRecord, names: &[&str], source_name: &str) -> Result<usize, DataLoadError> {
    headers
        .iter()
        .position(|header| names.iter().any(|n| header.trim().eq_ignore_ascii_case(n)))
        .ok_or_else(|| DataLoadError::MissingColumn {
            source_name: source_name.to_string(),
            column: names[0].to_string(),
        })
}

fn field(row: &StringRecord, idx: usize) -> String {
    row.get(idx).unwrap_or_default().to_string()
}

/// Interprets a boolean-like cell; `None` when the value is not recognised.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "1" | "1.0" | "x" => Some(true),
        "false" | "f" | "no" | "n" | "0" | "0.0" | "" => Some(false),
        _ => None,
    }
}

fn parse_coordinate(value: &str, column: &str, program: &str, line: u64) -> Option<f64> {
    if value.is_empty() {
        return None;
    }

    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            warn!(line, program, column, value, "Unusable coordinate, pantry will not be plotted");
            None
        }
    }
}
