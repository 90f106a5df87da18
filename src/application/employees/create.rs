use crate::application::form::{EmployeeDraft, prepare_submission};
use crate::domain::employees::{Employee, EmployeeRepository};
use crate::shared::error::AppError;
use std::sync::Arc;
use time::Date;

pub struct CreateEmployeeUseCase {
    repo: Arc<dyn EmployeeRepository>,
}

impl CreateEmployeeUseCase {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    /// Validates the draft against `today` and submits it as a new record.
    #[tracing::instrument(skip(self, draft))]
    pub async fn execute(&self, draft: &EmployeeDraft, today: Date) -> Result<Employee, AppError> {
        let new_employee = prepare_submission(draft, today)?;

        let employee = self.repo.create(new_employee).await.map_err(|e| {
            tracing::error!("Failed to submit employee: {:?}", e);
            AppError::InternalServerError(e)
        })?;

        tracing::info!("created employee {}", employee.id);
        Ok(employee)
    }
}
