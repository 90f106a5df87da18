use crate::domain::catalog::{CatalogRepository, Department, Skill, Wing};
use crate::domain::employees::{Employee, EmployeeRepository, NewEmployee};
use crate::infrastructure::config::ApiConfig;
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("{method} {path} returned {status}: {body}")]
    UnexpectedStatus {
        method: Method,
        path: String,
        status: StatusCode,
        body: String,
    },
}

/// REST client for the employee records API. Implements both repository
/// traits so one instance serves the whole application.
#[derive(Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, anyhow::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("{} {}", method, url);
        self.client.request(method, url)
    }

    async fn send(&self, method: Method, path: &str, builder: RequestBuilder) -> Result<Response, anyhow::Error> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(HttpError::UnexpectedStatus {
            method,
            path: path.to_string(),
            status,
            body,
        }
        .into())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, anyhow::Error> {
        let builder = self.request(Method::GET, path);
        let response = self.send(Method::GET, path, builder).await?;
        Ok(response.json::<T>().await?)
    }

    async fn send_employee(
        &self,
        method: Method,
        path: &str,
        employee: &NewEmployee,
    ) -> Result<Employee, anyhow::Error> {
        let builder = self.request(method.clone(), path).json(employee);
        let response = self.send(method, path, builder).await?;
        Ok(response.json::<Employee>().await?)
    }
}

/// Turns a 404 into `None`; other failures pass through.
fn found<T>(result: Result<T, anyhow::Error>) -> Result<Option<T>, anyhow::Error> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) => match e.downcast_ref::<HttpError>() {
            Some(HttpError::UnexpectedStatus { status, .. }) if *status == StatusCode::NOT_FOUND => {
                Ok(None)
            }
            _ => Err(e),
        },
    }
}

#[async_trait]
impl EmployeeRepository for HttpApiClient {
    async fn create(&self, new_employee: NewEmployee) -> Result<Employee, anyhow::Error> {
        self.send_employee(Method::POST, "/employees", &new_employee)
            .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, anyhow::Error> {
        found(self.get_json(&format!("/employees/{id}")).await)
    }

    async fn find_all(&self) -> Result<Vec<Employee>, anyhow::Error> {
        self.get_json("/employees").await
    }

    async fn update(
        &self,
        id: i64,
        employee: NewEmployee,
    ) -> Result<Option<Employee>, anyhow::Error> {
        found(
            self.send_employee(Method::PUT, &format!("/employees/{id}"), &employee)
                .await,
        )
    }
}

#[async_trait]
impl CatalogRepository for HttpApiClient {
    async fn skills(&self) -> Result<Vec<Skill>, anyhow::Error> {
        self.get_json("/skills").await
    }

    async fn wings(&self) -> Result<Vec<Wing>, anyhow::Error> {
        self.get_json("/wings").await
    }

    async fn departments(&self, wing_id: i64) -> Result<Vec<Department>, anyhow::Error> {
        self.get_json(&format!("/wings/{wing_id}/departments")).await
    }
}
