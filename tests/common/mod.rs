use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use hrdesk::application::form::{DraftAction, EmployeeDraft, ExperienceField};
use hrdesk::domain::catalog::{CatalogRepository, Department, Skill, Wing};
use hrdesk::domain::employees::{Employee, EmployeeRepository, Gender, NewEmployee};
use hrdesk::infrastructure::config::ApiConfig;
use hrdesk::infrastructure::repositories::http::HttpApiClient;
use hrdesk::infrastructure::repositories::mock::{MockCatalogRepository, MockEmployeeRepository};
use hrdesk::infrastructure::state::AppState;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tempfile::NamedTempFile;

/// In-process stand-in for the employee records API, backed by the mock
/// repositories.
#[derive(Clone, Default)]
pub struct FakeBackend {
    employees: MockEmployeeRepository,
    catalog: MockCatalogRepository,
}

type ApiResult<T> = Result<Json<T>, StatusCode>;

fn internal(e: anyhow::Error) -> StatusCode {
    eprintln!("fake backend error: {:?}", e);
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn list_employees(State(backend): State<FakeBackend>) -> ApiResult<Vec<Employee>> {
    backend.employees.find_all().await.map(Json).map_err(internal)
}

async fn get_employee(
    State(backend): State<FakeBackend>,
    Path(id): Path<i64>,
) -> ApiResult<Employee> {
    match backend.employees.find_by_id(id).await.map_err(internal)? {
        Some(employee) => Ok(Json(employee)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

async fn create_employee(
    State(backend): State<FakeBackend>,
    Json(new_employee): Json<NewEmployee>,
) -> Result<(StatusCode, Json<Employee>), StatusCode> {
    let employee = backend.employees.create(new_employee).await.map_err(internal)?;
    Ok((StatusCode::CREATED, Json(employee)))
}

async fn update_employee(
    State(backend): State<FakeBackend>,
    Path(id): Path<i64>,
    Json(employee): Json<NewEmployee>,
) -> ApiResult<Employee> {
    match backend.employees.update(id, employee).await.map_err(internal)? {
        Some(employee) => Ok(Json(employee)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

async fn skills(State(backend): State<FakeBackend>) -> ApiResult<Vec<Skill>> {
    backend.catalog.skills().await.map(Json).map_err(internal)
}

async fn wings(State(backend): State<FakeBackend>) -> ApiResult<Vec<Wing>> {
    backend.catalog.wings().await.map(Json).map_err(internal)
}

async fn departments(
    State(backend): State<FakeBackend>,
    Path(wing_id): Path<i64>,
) -> ApiResult<Vec<Department>> {
    backend
        .catalog
        .departments(wing_id)
        .await
        .map(Json)
        .map_err(internal)
}

pub fn fake_router(backend: FakeBackend) -> Router {
    Router::new()
        .route("/api/employees", get(list_employees).post(create_employee))
        .route("/api/employees/{id}", get(get_employee).put(update_employee))
        .route("/api/skills", get(skills))
        .route("/api/wings", get(wings))
        .route("/api/wings/{id}/departments", get(departments))
        .with_state(backend)
}

/// Serves a fresh fake backend on an ephemeral port and returns its API base
/// URL.
pub async fn spawn_fake_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake backend");
    let addr = listener.local_addr().expect("Failed to read local address");
    let app = fake_router(FakeBackend::default());

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Fake backend stopped");
    });

    format!("http://{}/api", addr)
}

pub fn client_for(base_url: &str) -> HttpApiClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        timeout: Duration::from_secs(5),
    };
    HttpApiClient::new(&config).expect("Failed to create API client")
}

#[allow(dead_code)]
pub fn http_state(base_url: &str) -> AppState {
    let client = Arc::new(client_for(base_url));
    AppState::new(client.clone(), client)
}

#[allow(dead_code)]
pub fn mock_state() -> (AppState, MockEmployeeRepository) {
    let employees = MockEmployeeRepository::default();
    let state = AppState::new(
        Arc::new(employees.clone()),
        Arc::new(MockCatalogRepository::default()),
    );
    (state, employees)
}

fn edit(index: usize, field: ExperienceField, value: &str) -> DraftAction {
    DraftAction::EditExperience {
        index,
        field,
        value: value.to_string(),
    }
}

/// A draft that passes validation, with two experience rows (27 + 10 months).
#[allow(dead_code)]
pub fn complete_draft() -> EmployeeDraft {
    let (draft, rejected) = EmployeeDraft::new().apply_all([
        DraftAction::SetFirstName("Farhana".to_string()),
        DraftAction::SetLastName("Chowdhury".to_string()),
        DraftAction::SetGender(Gender::Female),
        DraftAction::SetDateOfBirth("1991-10-12".to_string()),
        DraftAction::SetDateOfJoined("2023-08-01".to_string()),
        DraftAction::SetAddress("House 7, Road 3, Dhanmondi".to_string()),
        DraftAction::SetSkills(vec![3, 1]),
        DraftAction::SelectWing(Some(1)),
        DraftAction::SelectDepartment(Some(11)),
        DraftAction::SetHasExperience(true),
        edit(0, ExperienceField::Location, "Dhaka"),
        edit(0, ExperienceField::Organization, "Acme Ltd"),
        edit(0, ExperienceField::FromDate, "2020-01-01"),
        edit(0, ExperienceField::ToDate, "2022-04-01"),
        DraftAction::AddExperience,
        edit(1, ExperienceField::Location, "Chattogram"),
        edit(1, ExperienceField::Organization, "Initech"),
        edit(1, ExperienceField::FromDate, "2022-05-01"),
        edit(1, ExperienceField::ToDate, "2023-03-01"),
    ]);
    assert!(rejected.is_empty(), "unexpected rejections: {:?}", rejected);
    draft
}

/// Writes `contents` to a temp file that is deleted when the handle drops.
#[allow(dead_code)]
pub fn write_temp_file(suffix: &str, contents: &[u8]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("hrdesk-")
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents).expect("Failed to write temp file");
    file
}
