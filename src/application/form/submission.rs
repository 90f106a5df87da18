use super::draft::{EmployeeDraft, ExperienceDraft};
use crate::domain::catalog::IdRef;
use crate::domain::employees::{Gender, NewEmployee, NewExperience};
use crate::domain::experience::{self, ExperienceSpan, MAX_EXPERIENCES};
use crate::shared::dates::parse_date;
use crate::shared::error::AppError;
use crate::shared::validation::{FieldError, FieldErrors};
use time::Date;
use validator::Validate;

#[derive(Debug, Validate)]
struct EmployeeSubmission {
    #[validate(length(min = 1, message = "First name is required"))]
    first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    last_name: String,
    #[validate(required(message = "Gender is required"))]
    gender: Option<Gender>,
    #[validate(required(message = "Date of Birth is required"))]
    date_of_birth: Option<Date>,
    #[validate(required(message = "Date of Joining is required"))]
    date_of_joined: Option<Date>,
    #[validate(length(min = 1, message = "Address is required"))]
    address: String,
    #[validate(length(min = 1, message = "Select at least one skill"))]
    skills: Vec<i64>,
    #[validate(required(message = "Wing is required"))]
    wing: Option<i64>,
    #[validate(required(message = "Department is required"))]
    department: Option<i64>,
    #[validate(required(message = "Please select if you have experience"))]
    has_experience: Option<bool>,
    #[validate(nested)]
    experiences: Vec<ExperienceSubmission>,
}

#[derive(Debug, Validate)]
struct ExperienceSubmission {
    #[validate(length(min = 1, message = "Location is required"))]
    location: String,
    #[validate(length(min = 1, message = "Organization is required"))]
    organization: String,
    #[validate(required(message = "From Date is required"))]
    from_date: Option<Date>,
    #[validate(required(message = "To Date is required"))]
    to_date: Option<Date>,
}

impl From<&ExperienceDraft> for ExperienceSubmission {
    fn from(entry: &ExperienceDraft) -> Self {
        Self {
            location: entry.location.trim().to_string(),
            organization: entry.organization.trim().to_string(),
            from_date: parse_date(&entry.from_date),
            to_date: parse_date(&entry.to_date),
        }
    }
}

/// Validates `draft` and builds the payload to send.
///
/// All problems are reported together as field errors. Experience rows are
/// only checked while the form says the employee has experience. `today`
/// bounds the birth date and fixes the submitted age.
pub fn prepare_submission(draft: &EmployeeDraft, today: Date) -> Result<NewEmployee, AppError> {
    let has_experience = draft.has_experience();
    let entries: &[ExperienceDraft] = if has_experience == Some(true) {
        draft.experiences()
    } else {
        &[]
    };

    let submission = EmployeeSubmission {
        first_name: draft.first_name().trim().to_string(),
        last_name: draft.last_name().trim().to_string(),
        gender: draft.gender(),
        date_of_birth: parse_date(draft.date_of_birth()),
        date_of_joined: parse_date(draft.date_of_joined()),
        address: draft.address().trim().to_string(),
        skills: draft.skills().to_vec(),
        wing: draft.wing_id(),
        department: draft.department_id(),
        has_experience,
        experiences: entries.iter().map(ExperienceSubmission::from).collect(),
    };

    let mut errors = match submission.validate() {
        Ok(()) => FieldErrors::default(),
        Err(e) => FieldErrors::from(e),
    };

    // Typed-but-unparsable dates get a clearer message than "required".
    reword_invalid(&mut errors, "date_of_birth", draft.date_of_birth(), "Date of Birth");
    reword_invalid(&mut errors, "date_of_joined", draft.date_of_joined(), "Date of Joining");
    for (index, entry) in entries.iter().enumerate() {
        let from = format!("experiences[{index}].from_date");
        let to = format!("experiences[{index}].to_date");
        reword_invalid(&mut errors, &from, &entry.from_date, "From Date");
        reword_invalid(&mut errors, &to, &entry.to_date, "To Date");
    }

    let mut ordering = FieldErrors::default();
    if let Some(birth) = submission.date_of_birth {
        if birth > today {
            ordering.push(FieldError::new(
                "date_of_birth",
                "Date of Birth cannot be in the future",
            ));
        }
    }
    for (index, entry) in submission.experiences.iter().enumerate() {
        if let (Some(from), Some(to)) = (entry.from_date, entry.to_date) {
            if to < from {
                ordering.push(FieldError::new(
                    format!("experiences[{index}].to_date"),
                    "To Date cannot be before From Date",
                ));
            }
        }
    }
    errors.extend_missing(ordering);

    if !errors.is_empty() {
        tracing::debug!("employee form rejected: {}", errors);
        return Err(AppError::ValidationError(errors));
    }

    build_payload(submission, draft, today)
}

fn reword_invalid(errors: &mut FieldErrors, field: &str, raw: &str, label: &str) {
    if !raw.trim().is_empty() && parse_date(raw).is_none() {
        errors.reword(field, &format!("{label} must be a valid date"));
    }
}

fn build_payload(
    submission: EmployeeSubmission,
    draft: &EmployeeDraft,
    today: Date,
) -> Result<NewEmployee, AppError> {
    // Validation above guarantees every required value is present.
    let missing = || anyhow::anyhow!("validated submission is missing a required field");

    let date_of_birth = submission.date_of_birth.ok_or_else(missing)?;
    let mut experiences = Vec::with_capacity(submission.experiences.len().min(MAX_EXPERIENCES));
    for entry in submission.experiences {
        let from_date = entry.from_date.ok_or_else(missing)?;
        let to_date = entry.to_date.ok_or_else(missing)?;
        experiences.push(NewExperience {
            location: entry.location,
            organization: entry.organization,
            from_date,
            to_date,
            experience: experience::entry_label(ExperienceSpan::between(from_date, to_date)),
        });
    }
    let total_experience = experience::total_label(
        experiences
            .iter()
            .map(|e| ExperienceSpan::between(e.from_date, e.to_date)),
    );

    Ok(NewEmployee {
        first_name: submission.first_name,
        last_name: submission.last_name,
        gender: submission.gender.ok_or_else(missing)?,
        date_of_birth,
        age: crate::domain::age::age_on(date_of_birth, today),
        date_of_joined: submission.date_of_joined.ok_or_else(missing)?,
        address: submission.address,
        skills: submission.skills.into_iter().map(IdRef::from).collect(),
        wing: IdRef::from(submission.wing.ok_or_else(missing)?),
        department: IdRef::from(submission.department.ok_or_else(missing)?),
        has_experience: submission.has_experience.unwrap_or(false),
        experiences,
        total_experience,
        photo: draft.photo().cloned(),
    })
}
