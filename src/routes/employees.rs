use crate::AppState;
use crate::error::AppResult;
use crate::models::{ApiResponse, Employee, ResponseMeta};
use crate::services::EmployeesService;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct EmployeeIdQuery {
    pub id: i32,
}

pub async fn get_all(State(state): State<Arc<AppState>>) -> AppResult<impl IntoResponse> {
    let employees = EmployeesService::list(&state.store)?;

    let meta = ResponseMeta {
        request_id: None,
        total_count: Some(employees.len() as i64),
        execution_time_ms: None,
    };

    let response =
        ApiResponse::success_with_meta(employees, "Employees retrieved successfully", meta);
    Ok((StatusCode::OK, Json(response)))
}

pub async fn get_by_id(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EmployeeIdQuery>,
) -> AppResult<impl IntoResponse> {
    let employee = EmployeesService::get_by_id(&state.store, params.id)?;
    let response = ApiResponse::success(employee, "Employee retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(employee): Json<Employee>,
) -> AppResult<impl IntoResponse> {
    let stored = EmployeesService::create(&state.store, employee)?;
    let response = ApiResponse::created(stored, "Employee created successfully");
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Json(employee): Json<Employee>,
) -> AppResult<impl IntoResponse> {
    let updated = EmployeesService::update(&state.store, employee)?;
    let response = ApiResponse::success(updated, "Employee updated successfully");
    Ok((StatusCode::OK, Json(response)))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EmployeeIdQuery>,
) -> AppResult<impl IntoResponse> {
    EmployeesService::delete(&state.store, params.id)?;
    let response = ApiResponse::<()>::ok("Employee deleted successfully");
    Ok((StatusCode::OK, Json(response)))
}
