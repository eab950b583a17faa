//! DTOs for the map and pantry list endpoints.

use serde::Serialize;

use super::filter::CriteriaDto;
use crate::application::views::{MapModel, TableModel};

/// Response for `GET /api/map`.
#[derive(Debug, Serialize)]
pub struct MapResponse {
    pub criteria: CriteriaDto,
    pub map: MapModel,
}

/// Response for `GET /api/pantries`.
#[derive(Debug, Serialize)]
pub struct PantriesResponse {
    pub criteria: CriteriaDto,
    pub count: usize,
    pub table: TableModel,
}

/// Response for `GET /api/institutions`.
#[derive(Debug, Serialize)]
pub struct InstitutionsResponse {
    pub institutions: Vec<String>,
}
