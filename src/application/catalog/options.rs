use crate::domain::catalog::{CatalogRepository, Skill, Wing};
use std::sync::Arc;

/// Choices offered by the employee form when it opens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormOptions {
    pub skills: Vec<Skill>,
    pub wings: Vec<Wing>,
}

pub struct LoadFormOptionsUseCase {
    repo: Arc<dyn CatalogRepository>,
}

impl LoadFormOptionsUseCase {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }

    /// Loads skills and wings concurrently. Either list is left empty when its
    /// fetch fails; the failure is only logged.
    #[tracing::instrument(skip(self))]
    pub async fn execute(&self) -> FormOptions {
        let (skills, wings) = futures::join!(self.repo.skills(), self.repo.wings());

        let skills = skills.unwrap_or_else(|e| {
            tracing::warn!("Failed to load skills: {:?}", e);
            Vec::new()
        });
        let wings = wings.unwrap_or_else(|e| {
            tracing::warn!("Failed to load wings: {:?}", e);
            Vec::new()
        });

        FormOptions { skills, wings }
    }
}
