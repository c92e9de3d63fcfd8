// Presentation layer - HTTP routing and handlers
pub mod app_state;
pub mod cell_response;
pub mod handlers;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    create_cell, create_dashboard, get_cell, get_dashboard, health_check, list_cells, remove_cell,
    replace_cell,
};
use axum::{Router, routing::get, routing::post};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/chronograf/v1/dashboards", post(create_dashboard))
        .route("/chronograf/v1/dashboards/:id", get(get_dashboard))
        .route(
            "/chronograf/v1/dashboards/:id/cells",
            get(list_cells).post(create_cell),
        )
        .route(
            "/chronograf/v1/dashboards/:id/cells/:cid",
            get(get_cell).put(replace_cell).delete(remove_cell),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
