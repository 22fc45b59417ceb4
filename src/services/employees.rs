//! Employees service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{Employee, EmployeeInput},
    repository::EmployeeStore,
};

#[derive(Clone)]
pub struct EmployeesService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeesService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Employee>> {
        Ok(self.store.list().await?)
    }

    pub async fn create(&self, data: &EmployeeInput) -> AppResult<Vec<Employee>> {
        let created = self.store.insert(data).await?;
        for employee in &created {
            tracing::info!(id = employee.id, "Employee created");
        }
        Ok(created)
    }

    /// Replace every mutable field. An unknown id is not an error.
    pub async fn update(&self, id: i64, data: &EmployeeInput) -> AppResult<()> {
        let affected = self.store.update(id, data).await?;
        if affected == 0 {
            tracing::warn!(id, "Update matched no employee");
        }
        Ok(())
    }

    /// Delete by id. An unknown id is not an error.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let affected = self.store.delete(id).await?;
        if affected == 0 {
            tracing::warn!(id, "Delete matched no employee");
        }
        Ok(())
    }

    /// Store connectivity check for readiness probes
    pub async fn ping(&self) -> AppResult<()> {
        Ok(self.store.ping().await?)
    }
}
