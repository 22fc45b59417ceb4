//! Business logic services

pub mod employees;

use std::sync::Arc;

use crate::repository::{EmployeeStore, Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub employees: employees::EmployeesService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self::with_store(Arc::new(repository.employees))
    }

    /// Create all services on top of an arbitrary employee store
    pub fn with_store(store: Arc<dyn EmployeeStore>) -> Self {
        Self {
            employees: employees::EmployeesService::new(store),
        }
    }
}
