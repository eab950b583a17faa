//! View-models derived from a filtered view.
//!
//! - [`map`] - Markers with HTML popups, center point and legend
//! - [`table`] - Plain rows for the data table
//!
//! Both are pure functions of the same filtered sequence.

pub mod map;
pub mod table;

pub use map::{LatLng, MapModel, MapSettings, Marker, build_map};
pub use table::{TableModel, TableRow, render_table};
