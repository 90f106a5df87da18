use crate::application::form::{EmployeeDraft, prepare_submission};
use crate::domain::employees::{Employee, EmployeeRepository};
use crate::shared::error::AppError;
use std::sync::Arc;
use time::Date;

pub struct UpdateEmployeeUseCase {
    repo: Arc<dyn EmployeeRepository>,
}

impl UpdateEmployeeUseCase {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self, draft))]
    pub async fn execute(
        &self,
        id: i64,
        draft: &EmployeeDraft,
        today: Date,
    ) -> Result<Employee, AppError> {
        let employee = prepare_submission(draft, today)?;

        let updated = self.repo.update(id, employee).await.map_err(|e| {
            tracing::error!("Failed to update employee {}: {:?}", id, e);
            AppError::InternalServerError(e)
        })?;

        updated.ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))
    }
}
