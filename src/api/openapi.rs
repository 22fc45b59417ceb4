//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{employees, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Registry API",
        version = "1.0.0",
        description = "CRUD REST API for employee records"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Employees
        employees::list_employees,
        employees::create_employee,
        employees::update_employee,
        employees::delete_employee,
    ),
    components(
        schemas(
            crate::models::employee::Employee,
            crate::models::employee::EmployeeInput,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "employees", description = "Employee records")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
