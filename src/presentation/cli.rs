use crate::application::catalog::departments::{DepartmentOptions, LoadDepartmentsUseCase};
use crate::application::catalog::options::LoadFormOptionsUseCase;
use crate::application::employees::create::CreateEmployeeUseCase;
use crate::application::employees::get::GetEmployeeUseCase;
use crate::application::employees::list::ListEmployeesUseCase;
use crate::application::employees::update::UpdateEmployeeUseCase;
use crate::application::form::{DraftAction, EmployeeDraft, EmployeeForm};
use crate::domain::age::age_on;
use crate::domain::experience::{self, ExperienceSpan};
use crate::domain::photo::PhotoDataUri;
use crate::infrastructure::state::AppState;
use crate::presentation::views::{employees, form};
use crate::shared::dates::parse_date;
use crate::shared::error::AppError;
use anyhow::{Context, anyhow, bail};
use clap::{Parser, Subcommand};
use std::fmt::Write;
use std::path::{Path, PathBuf};
use time::Date;

/// Employee records client
#[derive(Parser, Debug)]
#[command(name = "hrdesk", version, about = "Employee records client", long_about = None)]
pub struct Cli {
    /// Base URL of the employee records API
    #[arg(long, global = true, env = "API_BASE_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all employees
    List,
    /// Show one employee in full
    Show { id: i64 },
    /// Register a new employee from a JSON form file
    Create {
        #[arg(long)]
        form: PathBuf,
        /// Image to attach as the employee photo
        #[arg(long)]
        photo: Option<PathBuf>,
    },
    /// Replace an existing employee with the contents of a JSON form file
    Update {
        id: i64,
        #[arg(long)]
        form: PathBuf,
        #[arg(long)]
        photo: Option<PathBuf>,
    },
    /// List the skills that can be assigned
    Skills,
    /// List the wings
    Wings,
    /// List the departments of a wing
    Departments { wing_id: i64 },
    /// Compute an age from a date of birth
    Age {
        dob: String,
        /// Reference date instead of today
        #[arg(long)]
        today: Option<String>,
    },
    /// Compute experience labels for FROM:TO date ranges
    Experience {
        #[arg(required = true)]
        ranges: Vec<String>,
    },
}

impl Command {
    /// Whether the command talks to the API.
    pub fn needs_api(&self) -> bool {
        !matches!(self, Command::Age { .. } | Command::Experience { .. })
    }
}

/// Runs `command` and returns what should be printed.
pub async fn execute(
    command: Command,
    state: &AppState,
    today: Date,
) -> Result<String, anyhow::Error> {
    match command {
        Command::List => {
            let list = ListEmployeesUseCase::new(state.employees.clone())
                .execute()
                .await?;
            Ok(employees::render_list(&list))
        }
        Command::Show { id } => {
            let employee = GetEmployeeUseCase::new(state.employees.clone())
                .execute(id)
                .await?;
            Ok(employees::render_details(&employee))
        }
        Command::Create {
            form: form_path,
            photo,
        } => {
            let (draft, mut out) =
                prepare_draft(state, &EmployeeDraft::new(), &form_path, photo.as_deref()).await?;
            let created = CreateEmployeeUseCase::new(state.employees.clone())
                .execute(&draft, today)
                .await
                .map_err(form_error)?;
            out.push_str(&form::render_preview(&draft, today));
            let _ = writeln!(out, "Employee submitted with id {}.", created.id);
            Ok(out)
        }
        Command::Update {
            id,
            form: form_path,
            photo,
        } => {
            let existing = GetEmployeeUseCase::new(state.employees.clone())
                .execute(id)
                .await?;
            let (base, dropped) = EmployeeDraft::from_employee(&existing);
            let (draft, notices) =
                prepare_draft(state, &base, &form_path, photo.as_deref()).await?;
            let mut out = form::render_notices(&dropped);
            out.push_str(&notices);
            let updated = UpdateEmployeeUseCase::new(state.employees.clone())
                .execute(id, &draft, today)
                .await
                .map_err(form_error)?;
            out.push_str(&form::render_preview(&draft, today));
            let _ = writeln!(out, "Employee {} updated.", updated.id);
            Ok(out)
        }
        Command::Skills => {
            let options = LoadFormOptionsUseCase::new(state.catalog.clone()).execute().await;
            Ok(form::render_skills(&options.skills))
        }
        Command::Wings => {
            let options = LoadFormOptionsUseCase::new(state.catalog.clone()).execute().await;
            Ok(form::render_wings(&options.wings))
        }
        Command::Departments { wing_id } => {
            let mut options = DepartmentOptions::new();
            let ticket = options.select_wing(Some(wing_id));
            if let Some(ticket) = ticket {
                let response = LoadDepartmentsUseCase::new(state.catalog.clone())
                    .execute(ticket)
                    .await;
                options.accept(response);
            }
            Ok(form::render_departments(options.departments()))
        }
        Command::Age { dob, today: at } => {
            let birth = parse_date(&dob).ok_or_else(|| anyhow!("invalid date of birth: {dob}"))?;
            let at = match at {
                Some(raw) => parse_date(&raw).ok_or_else(|| anyhow!("invalid date: {raw}"))?,
                None => today,
            };
            Ok(format!("{}\n", age_on(birth, at)))
        }
        Command::Experience { ranges } => Ok(render_ranges(&ranges)),
    }
}

/// Builds the draft from a form file the way a user fills the form: catalog
/// options are loaded, the department is checked against the selected wing
/// and the photo is encoded.
async fn prepare_draft(
    state: &AppState,
    base: &EmployeeDraft,
    form_path: &Path,
    photo_path: Option<&Path>,
) -> Result<(EmployeeDraft, String), anyhow::Error> {
    let raw = tokio::fs::read_to_string(form_path)
        .await
        .with_context(|| format!("reading form {}", form_path.display()))?;
    let input: EmployeeForm =
        serde_json::from_str(&raw).with_context(|| format!("parsing form {}", form_path.display()))?;

    let (mut draft, notices) = input.fill(base);
    let mut out = form::render_notices(&notices);

    let options = LoadFormOptionsUseCase::new(state.catalog.clone()).execute().await;
    let known: Vec<i64> = options.skills.iter().map(|s| s.id).collect();
    let unknown = draft
        .skills()
        .iter()
        .filter(|&&id| !known.is_empty() && !known.contains(&id));
    for id in unknown {
        let _ = writeln!(out, "! Skill {} is not in the skills list", id);
    }

    let mut departments = DepartmentOptions::new();
    if let Some(ticket) = departments.select_wing(draft.wing_id()) {
        let response = LoadDepartmentsUseCase::new(state.catalog.clone())
            .execute(ticket)
            .await;
        departments.accept(response);
    }
    if let (Some(wing_id), Some(department_id)) = (draft.wing_id(), draft.department_id()) {
        if !departments.departments().is_empty() && !departments.contains(department_id) {
            let _ = writeln!(
                out,
                "! Department {} does not belong to wing {}",
                department_id, wing_id
            );
            draft = draft.apply(DraftAction::SelectDepartment(None))?;
        }
    }

    if let Some(path) = photo_path {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("reading photo {}", path.display()))?;
        let photo = PhotoDataUri::from_bytes(&bytes)?;
        draft = draft.apply(DraftAction::SetPhoto(Some(photo)))?;
    }

    Ok((draft, out))
}

fn form_error(err: AppError) -> anyhow::Error {
    match err {
        AppError::ValidationError(errors) => {
            anyhow!("employee form has errors:\n{}", form::render_field_errors(&errors))
        }
        other => other.into(),
    }
}

/// One line per `FROM:TO` range plus the total; either side may be blank.
fn render_ranges(ranges: &[String]) -> String {
    let spans: Vec<Option<ExperienceSpan>> = ranges
        .iter()
        .map(|range| {
            let (from, to) = range.split_once(':').unwrap_or((range.as_str(), ""));
            ExperienceSpan::from_raw(from, to)
        })
        .collect();

    let mut out = String::new();
    for (range, span) in ranges.iter().zip(&spans) {
        let _ = writeln!(out, "{}  {}", range, experience::entry_label(*span));
    }
    let _ = writeln!(out, "Total Experience: {}", experience::total_label(spans));
    out
}

/// Rejects an empty command line argument early.
pub fn ensure_api_url(url: &str) -> Result<(), anyhow::Error> {
    if url.trim().is_empty() {
        bail!("API base URL must not be empty");
    }
    Ok(())
}
