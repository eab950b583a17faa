//! Map view builder: filtered pantries to markers, popups and a legend.

use askama::Template;
use serde::Serialize;

use crate::domain::entities::PantryRecord;

/// Map defaults used when nothing can be plotted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapSettings {
    pub default_latitude: f64,
    pub default_longitude: f64,
    pub zoom: u8,
}

impl Default for MapSettings {
    /// Centered on Manhattan.
    fn default() -> Self {
        Self {
            default_latitude: 40.7831,
            default_longitude: -73.9712,
            zoom: 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

/// Icon drawn for every pantry marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerIcon {
    pub color: &'static str,
    pub glyph: &'static str,
}

const PANTRY_ICON: MarkerIcon = MarkerIcon {
    color: "blue",
    glyph: "info-sign",
};

/// Popup width in pixels; Leaflet is given a slightly larger max width.
pub const POPUP_WIDTH: u32 = 600;
pub const POPUP_MAX_WIDTH: u32 = 650;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub popup_html: String,
    pub icon: MarkerIcon,
}

/// Everything the browser needs to draw the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapModel {
    pub center: LatLng,
    pub zoom: u8,
    pub markers: Vec<Marker>,
    pub legend_html: String,
    pub popup_max_width: u32,
    /// Records of the filtered view left off the map for lack of coordinates.
    pub skipped: usize,
}

#[derive(Template)]
#[template(path = "fragments/popup.html")]
struct PopupTemplate<'a> {
    name: &'a str,
    hours: &'a str,
    phone: &'a str,
    address: &'a str,
    width: u32,
}

#[derive(Template)]
#[template(path = "fragments/legend.html")]
struct LegendTemplate {
    color: &'static str,
}

/// Builds the map for a filtered view.
///
/// The center is the mean position of the plottable records, or the
/// configured default when there are none. Records without finite
/// coordinates are skipped. Popup fields are HTML-escaped.
///
/// # Errors
///
/// Returns an error only if a fragment template fails to render.
pub fn build_map(view: &[&PantryRecord], settings: &MapSettings) -> askama::Result<MapModel> {
    let mut markers = Vec::with_capacity(view.len());
    let (mut lat_sum, mut lon_sum) = (0.0, 0.0);

    for record in view {
        let Some((latitude, longitude)) = record.coordinates() else {
            continue;
        };

        lat_sum += latitude;
        lon_sum += longitude;

        markers.push(Marker {
            latitude,
            longitude,
            title: record.program.clone(),
            popup_html: render_popup(record)?,
            icon: PANTRY_ICON,
        });
    }

    let center = if markers.is_empty() {
        LatLng {
            latitude: settings.default_latitude,
            longitude: settings.default_longitude,
        }
    } else {
        let n = markers.len() as f64;
        LatLng {
            latitude: lat_sum / n,
            longitude: lon_sum / n,
        }
    };

    Ok(MapModel {
        center,
        zoom: settings.zoom,
        skipped: view.len() - markers.len(),
        markers,
        legend_html: render_legend()?,
        popup_max_width: POPUP_MAX_WIDTH,
    })
}

fn render_popup(record: &PantryRecord) -> askama::Result<String> {
    PopupTemplate {
        name: &record.program,
        hours: &record.hours,
        phone: &record.phone,
        address: &record.address,
        width: POPUP_WIDTH,
    }
    .render()
}

/// The static legend overlay; identical for every filter state.
pub fn render_legend() -> askama::Result<String> {
    LegendTemplate {
        color: PANTRY_ICON.color,
    }
    .render()
}
