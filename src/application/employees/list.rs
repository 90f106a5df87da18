use crate::domain::employees::{Employee, EmployeeRepository};
use crate::shared::error::AppError;
use std::sync::Arc;

pub struct ListEmployeesUseCase {
    repo: Arc<dyn EmployeeRepository>,
}

impl ListEmployeesUseCase {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.repo.find_all().await?)
    }
}
