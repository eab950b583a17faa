//! Table page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::response::IntoResponse;

use super::filters::FilterPanel;
use crate::api::dto::filter::criteria_from_query;
use crate::application::views::TableModel;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Template, WebTemplate)]
#[template(path = "table.html")]
pub struct TableTemplate {
    pub panel: FilterPanel,
    pub table: TableModel,
}

/// Renders the filtered pantries as a table.
///
/// # Endpoint
///
/// `GET /table?filtered=1&borough=Bronx&day=sat`
///
/// Uses the same filters as the map page, so rows without coordinates are
/// listed here even though they have no marker.
pub async fn table_page_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let criteria = criteria_from_query(&pairs, &state.locator.default_criteria())?;
    let table = state.locator.table(&criteria);

    Ok(TableTemplate {
        panel: FilterPanel::new(&state, &criteria),
        table,
    })
}
