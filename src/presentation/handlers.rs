// HTTP request handlers
use crate::domain::cell::DashboardCell;
use crate::domain::dashboard::{Dashboard, DashboardId};
use crate::infrastructure::http_response::ApiError;
use crate::presentation::app_state::AppState;
use crate::presentation::cell_response::{
    CellResponse, DashboardResponse, cell_response, cell_responses, dashboard_response,
};
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

fn parse_id(raw: &str) -> Result<DashboardId, ApiError> {
    raw.parse().map_err(|_| ApiError::invalid_id(raw))
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Rejected request body: {}", e);
        ApiError::invalid_json()
    })
}

/// Create a dashboard, validating any cells it arrives with
pub async fn create_dashboard(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<DashboardResponse>), ApiError> {
    let dashboard: Dashboard = decode(&body)?;
    let created = state.dashboard_service.create_dashboard(dashboard).await?;
    Ok((StatusCode::CREATED, Json(dashboard_response(&created))))
}

pub async fn get_dashboard(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let id = parse_id(&id)?;
    let dashboard = state.dashboard_service.dashboard(id).await?;
    Ok(Json(dashboard_response(&dashboard)))
}

/// List all cells of a dashboard
pub async fn list_cells(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CellResponse>>, ApiError> {
    let id = parse_id(&id)?;
    let dashboard = state.dashboard_service.dashboard(id).await?;
    Ok(Json(cell_responses(dashboard.id, &dashboard.cells)))
}

/// Add a cell to an existing dashboard
pub async fn create_cell(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<CellResponse>, ApiError> {
    let id = parse_id(&id)?;
    let dashboard = state.dashboard_service.dashboard(id).await?;
    let cell: DashboardCell = decode(&body)?;

    let cell = state.dashboard_service.add_cell(dashboard, cell).await?;
    Ok(Json(cell_response(id, &cell)))
}

pub async fn get_cell(
    Path((id, cell_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<CellResponse>, ApiError> {
    let id = parse_id(&id)?;
    let dashboard = state.dashboard_service.dashboard(id).await?;

    dashboard
        .cell(&cell_id)
        .map(|cell| Json(cell_response(id, cell)))
        .ok_or_else(|| ApiError::not_found(id))
}

pub async fn remove_cell(
    Path((id, cell_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let dashboard = state.dashboard_service.dashboard(id).await?;

    state.dashboard_service.remove_cell(dashboard, &cell_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Replace a cell entirely; the body's own `i` is ignored
pub async fn replace_cell(
    Path((id, cell_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<CellResponse>, ApiError> {
    let id = parse_id(&id)?;
    let dashboard = state.dashboard_service.dashboard(id).await?;
    if dashboard.cell_index(&cell_id).is_none() {
        return Err(ApiError::not_found(&cell_id));
    }
    let cell: DashboardCell = decode(&body)?;

    let cell = state
        .dashboard_service
        .replace_cell(dashboard, &cell_id, cell)
        .await?;
    Ok(Json(cell_response(id, &cell)))
}
