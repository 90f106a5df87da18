use crate::domain::employees::{Employee, EmployeeRepository};
use crate::shared::error::AppError;
use std::sync::Arc;

pub struct GetEmployeeUseCase {
    repo: Arc<dyn EmployeeRepository>,
}

impl GetEmployeeUseCase {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: i64) -> Result<Employee, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))
    }
}
