pub mod employees;

use crate::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

/// Legacy controller-style routes: `/api/Employee/<Action>`, with ids
/// passed as query parameters. The Angular client depends on this shape.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/Employee/GetAll", get(employees::get_all))
        .route("/api/Employee/GetById", get(employees::get_by_id))
        .route("/api/Employee/Create", post(employees::create))
        .route("/api/Employee/Update", put(employees::update))
        .route("/api/Employee/Delete", delete(employees::delete))
        .with_state(state)
}
