use crate::domain::catalog::CatalogRepository;
use crate::domain::employees::EmployeeRepository;
use crate::infrastructure::config::ApiConfig;
use crate::infrastructure::repositories::http::HttpApiClient;
use std::sync::Arc;

/// Repositories shared by every command.
#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<dyn EmployeeRepository>,
    pub catalog: Arc<dyn CatalogRepository>,
}

impl AppState {
    pub fn new(employees: Arc<dyn EmployeeRepository>, catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { employees, catalog }
    }

    /// Both repositories backed by one HTTP client.
    pub fn from_config(config: &ApiConfig) -> Result<Self, anyhow::Error> {
        let client = Arc::new(HttpApiClient::new(config)?);
        Ok(Self::new(client.clone(), client))
    }
}
