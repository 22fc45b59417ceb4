//! Repository layer for database operations

pub mod employees;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use thiserror::Error;

use crate::models::{Employee, EmployeeInput};

/// Failure reported by the persistent store, carrying its message verbatim
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        Self::new(e.to_string())
    }
}

/// Query interface the employee handlers need from the store.
///
/// `update` and `delete` return the number of affected rows; zero is not an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// All records, ordered by id
    async fn list(&self) -> Result<Vec<Employee>, StoreError>;

    /// Insert one record and return the inserted row(s)
    async fn insert(&self, data: &EmployeeInput) -> Result<Vec<Employee>, StoreError>;

    /// Overwrite every mutable field of the record with this id
    async fn update(&self, id: i64, data: &EmployeeInput) -> Result<u64, StoreError>;

    async fn delete(&self, id: i64) -> Result<u64, StoreError>;

    /// Round trip to check connectivity
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Main repository struct, one store per table on a shared pool
#[derive(Clone)]
pub struct Repository {
    pub employees: employees::EmployeesRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            employees: employees::EmployeesRepository::new(pool),
        }
    }
}
