//! Employees API endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{Employee, EmployeeInput},
    AppState,
};

use super::{ValidEmployee, ValidId};

pub const UPDATED_MESSAGE: &str = "Employee updated successfully";
pub const DELETED_MESSAGE: &str = "Employee deleted successfully";

/// List all employees
#[utoipa::path(
    get,
    path = "/employees",
    tag = "employees",
    responses(
        (status = 200, description = "Employee list", body = Vec<Employee>),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_employees(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.services.employees.list().await?;
    Ok(Json(employees))
}

/// Create an employee
#[utoipa::path(
    post,
    path = "/employees",
    tag = "employees",
    request_body = EmployeeInput,
    responses(
        (status = 201, description = "Employee created", body = Vec<Employee>),
        (status = 400, description = "Invalid payload", body = crate::error::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    ValidEmployee(data): ValidEmployee,
) -> AppResult<(StatusCode, Json<Vec<Employee>>)> {
    let created = state.services.employees.create(&data).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace an employee
#[utoipa::path(
    put,
    path = "/employees/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Employee ID")),
    request_body = EmployeeInput,
    responses(
        (status = 200, description = "Employee updated", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid id or payload", body = crate::error::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    ValidEmployee(data): ValidEmployee,
) -> AppResult<&'static str> {
    state.services.employees.update(id, &data).await?;
    Ok(UPDATED_MESSAGE)
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee deleted", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid id", body = crate::error::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> AppResult<&'static str> {
    state.services.employees.delete(id).await?;
    Ok(DELETED_MESSAGE)
}
