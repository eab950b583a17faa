//! Map page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::response::IntoResponse;

use super::filters::FilterPanel;
use crate::api::dto::filter::criteria_from_query;
use crate::application::views::MapModel;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the map page.
///
/// Renders `templates/map.html` with:
/// - Borough and day filter sidebar
/// - Leaflet map fed from an embedded JSON model
/// - Legend overlay
#[derive(Template, WebTemplate)]
#[template(path = "map.html")]
pub struct MapTemplate {
    pub panel: FilterPanel,
    pub map: MapModel,
    pub matched: usize,
    pub map_json: String,
}

/// Renders the pantry map for the requested filters.
///
/// # Endpoint
///
/// `GET /?filtered=1&borough=Manhattan&day=mon`
///
/// With no parameters the default borough and every day are selected.
pub async fn map_page_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let criteria = criteria_from_query(&pairs, &state.locator.default_criteria())?;
    let views = state.locator.render(criteria)?;

    let map_json = script_safe_json(&views.map)?;

    Ok(MapTemplate {
        panel: FilterPanel::new(&state, &views.criteria),
        matched: views.table.len(),
        map: views.map,
        map_json,
    })
}

/// Serializes `value` for embedding inside a `<script>` element.
///
/// `</` is escaped so popup content can never close the element early.
fn script_safe_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    let json = serde_json::to_string(value).map_err(|e| {
        tracing::error!("Failed to serialize map model: {}", e);
        AppError::internal("Internal server error", serde_json::json!({}))
    })?;

    Ok(json.replace("</", "<\\/"))
}
