//! API handlers for the employee registry REST endpoints

pub mod employees;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::{request::Parts, Uri},
    routing::{get, put},
    Json, Router,
};
use serde_json::Value;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::AppError,
    models::EmployeeInput,
    validation::{validate_employee, validate_id, ValidationError},
    AppState,
};

/// Extractor for a well-formed `:id` path segment
pub struct ValidId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ValidationError::InvalidId)?;

        let id = validate_id(&raw).map_err(|e| {
            tracing::warn!(id = %raw, "Employee id rejected");
            e
        })?;

        Ok(ValidId(id))
    }
}

/// Extractor for a create/update body that passed validation
pub struct ValidEmployee(pub EmployeeInput);

#[async_trait]
impl<S> FromRequest<S> for ValidEmployee
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let payload = match Json::<Value>::from_request(req, state).await {
            Ok(Json(payload)) => payload,
            // No JSON content type: nothing was sent as fields
            Err(JsonRejection::MissingJsonContentType(_)) => Value::Null,
            Err(rejection) => return Err(AppError::BadRequest(rejection.body_text())),
        };

        match validate_employee(&payload) {
            Ok(input) => {
                tracing::debug!(?input, "Employee payload accepted");
                Ok(ValidEmployee(input))
            }
            Err(e) => {
                tracing::warn!(error = %e, %payload, "Employee payload rejected");
                Err(e.into())
            }
        }
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let base_path = state.config.server.base_path.trim_matches('/').to_string();

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Employees
        .route(
            "/employees",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route(
            "/employees/:id",
            put(employees::update_employee).delete(employees::delete_employee),
        )
        .with_state(state);

    let router = if base_path.is_empty() {
        api
    } else {
        Router::new().nest(&format!("/{}", base_path), api)
    };

    router
        .merge(openapi::create_openapi_router())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
