//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Catalog**: Pantry and institution tables are loaded and non-empty
/// 2. **Delivery**: Mail backend is reachable (SMTP results are cached, see
///    [`crate::infrastructure::delivery::CachedHealth`])
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "catalog": {
///       "status": "ok",
///       "message": "552 pantries (548 mapped), 25 institutions, loaded 2026-10-19T12:00:00+00:00"
///     },
///     "delivery": {
///       "status": "ok",
///       "message": "smtp://smtp.example.com:587"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let catalog_check = check_catalog(&state);

    let delivery_check = check_delivery(&state).await;

    let all_healthy = catalog_check.status == "ok" && delivery_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            catalog: catalog_check,
            delivery: delivery_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Reports dataset sizes; an empty table means the locator is useless.
fn check_catalog(state: &AppState) -> CheckStatus {
    let catalog = state.locator.catalog();
    let pantries = catalog.pantries().len();
    let institutions = catalog.institutions().len();

    let message = format!(
        "{} pantries ({} mapped), {} institutions, loaded {}",
        pantries,
        catalog.plottable_count(),
        institutions,
        catalog.loaded_at().to_rfc3339()
    );

    CheckStatus {
        status: if pantries > 0 && institutions > 0 { "ok" } else { "error" }.to_string(),
        message: Some(message),
    }
}

/// Checks the mail backend connection.
async fn check_delivery(state: &AppState) -> CheckStatus {
    let delivery = state.contact.delivery();

    if delivery.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(delivery.describe()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some(format!("{} unreachable", delivery.describe())),
        }
    }
}
