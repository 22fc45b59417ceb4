//! Employees repository (PostgreSQL)

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::{EmployeeStore, StoreError};
use crate::models::{Employee, EmployeeInput};

const EMPLOYEE_COLUMNS: &str = "id, first_name, last_name, group_name, role, \
     expected_salary, expected_date_of_defense";

#[derive(Clone)]
pub struct EmployeesRepository {
    pool: Pool<Postgres>,
}

impl EmployeesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for EmployeesRepository {
    async fn list(&self) -> Result<Vec<Employee>, StoreError> {
        let query = format!("SELECT {} FROM employees ORDER BY id", EMPLOYEE_COLUMNS);
        let rows = sqlx::query_as::<_, Employee>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn insert(&self, data: &EmployeeInput) -> Result<Vec<Employee>, StoreError> {
        let query = format!(
            r#"
            INSERT INTO employees (first_name, last_name, group_name, role,
                                   expected_salary, expected_date_of_defense)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            EMPLOYEE_COLUMNS
        );
        let rows = sqlx::query_as::<_, Employee>(&query)
            .bind(&data.first_name)
            .bind(&data.last_name)
            .bind(&data.group_name)
            .bind(&data.role)
            .bind(data.expected_salary)
            .bind(data.expected_date_of_defense)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn update(&self, id: i64, data: &EmployeeInput) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET first_name = $1, last_name = $2, group_name = $3, role = $4,
                expected_salary = $5, expected_date_of_defense = $6
            WHERE id = $7
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.group_name)
        .bind(&data.role)
        .bind(data.expected_salary)
        .bind(data.expected_date_of_defense)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
