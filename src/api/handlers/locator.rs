//! Handlers for the map, pantry list and institution list endpoints.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::filter::{CriteriaDto, criteria_from_query};
use crate::api::dto::locator::{InstitutionsResponse, MapResponse, PantriesResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the map model for the requested filters.
///
/// # Endpoint
///
/// `GET /api/map?borough=Manhattan&day=mon`
///
/// # Response
///
/// ```json
/// {
///   "criteria": { "boroughs": ["Manhattan"], "days": ["mon"] },
///   "map": {
///     "center": { "latitude": 40.78, "longitude": -73.97 },
///     "zoom": 12,
///     "markers": [
///       {
///         "latitude": 40.78,
///         "longitude": -73.97,
///         "title": "Hope Pantry",
///         "popup_html": "<div ...>...</div>",
///         "icon": { "color": "blue", "glyph": "info-sign" }
///       }
///     ],
///     "legend_html": "<div ...>...</div>",
///     "popup_max_width": 650,
///     "skipped": 0
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for an unknown borough or day.
pub async fn map_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<MapResponse>, AppError> {
    let criteria = criteria_from_query(&pairs, &state.locator.default_criteria())?;
    let map = state.locator.map(&criteria)?;

    Ok(Json(MapResponse {
        criteria: CriteriaDto::from(&criteria),
        map,
    }))
}

/// Returns the filtered pantries as table rows.
///
/// # Endpoint
///
/// `GET /api/pantries?borough=Brooklyn&day=tue&day=thu`
///
/// Rows include pantries without coordinates, which the map leaves out.
///
/// # Errors
///
/// Returns 400 Bad Request for an unknown borough or day.
pub async fn pantries_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<PantriesResponse>, AppError> {
    let criteria = criteria_from_query(&pairs, &state.locator.default_criteria())?;
    let table = state.locator.table(&criteria);

    Ok(Json(PantriesResponse {
        criteria: CriteriaDto::from(&criteria),
        count: table.len(),
        table,
    }))
}

/// Lists the institutions that can be contacted.
///
/// # Endpoint
///
/// `GET /api/institutions`
pub async fn institutions_handler(State(state): State<AppState>) -> Json<InstitutionsResponse> {
    Json(InstitutionsResponse {
        institutions: state.contact.institution_names(),
    })
}
