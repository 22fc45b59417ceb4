//! Employee model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Employee record as stored in the `employees` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[schema(example = json!({
    "id": 1,
    "first_name": "Ada",
    "last_name": "Lovelace",
    "group_name": "Analytical Engines",
    "role": "Researcher",
    "expected_salary": 4200.5,
    "expected_date_of_defense": "2025-06-30T00:00:00Z"
}))]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub group_name: String,
    pub role: String,
    /// Written as a JSON number with the stored scale, e.g. `4200.50`
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64)]
    pub expected_salary: Decimal,
    /// Always UTC on the wire (RFC 3339)
    pub expected_date_of_defense: DateTime<Utc>,
}

/// Create/replace employee request, after validation
///
/// Built by [`crate::validation::validate_employee`] from the raw JSON body,
/// never deserialized directly.
#[derive(Debug, Clone, PartialEq, ToSchema)]
pub struct EmployeeInput {
    pub first_name: String,
    pub last_name: String,
    pub group_name: String,
    pub role: String,
    /// Number, or a string holding a number
    #[schema(value_type = f64)]
    pub expected_salary: Decimal,
    /// Any ISO-8601 / RFC 3339 date or date-time
    pub expected_date_of_defense: DateTime<Utc>,
}
