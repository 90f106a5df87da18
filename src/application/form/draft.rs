use crate::domain::age::age_on;
use crate::domain::employees::{Employee, Gender};
use crate::domain::experience::{self, ExperienceSpan, MAX_EXPERIENCES};
use crate::domain::photo::PhotoDataUri;
use crate::shared::dates::{format_date, parse_date};
use thiserror::Error;
use time::Date;

/// One experience row as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceDraft {
    pub location: String,
    pub organization: String,
    pub from_date: String,
    pub to_date: String,
}

impl ExperienceDraft {
    pub fn span(&self) -> Option<ExperienceSpan> {
        ExperienceSpan::from_raw(&self.from_date, &self.to_date)
    }

    /// `"2y 3m"`, or empty while either date is missing or invalid.
    pub fn label(&self) -> String {
        experience::entry_label(self.span())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    Location,
    Organization,
    FromDate,
    ToDate,
}

/// A single user action on the employee form.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftAction {
    SetFirstName(String),
    SetLastName(String),
    SetGender(Gender),
    SetDateOfBirth(String),
    SetDateOfJoined(String),
    SetAddress(String),
    SetSkills(Vec<i64>),
    SelectWing(Option<i64>),
    SelectDepartment(Option<i64>),
    SetHasExperience(bool),
    AddExperience,
    RemoveExperience(usize),
    EditExperience {
        index: usize,
        field: ExperienceField,
        value: String,
    },
    SetPhoto(Option<PhotoDataUri>),
    /// Clears every field. An edit draft keeps the id of its record.
    Reset,
}

/// An action the form refuses. The draft it was applied to is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftRejected {
    #[error("You can add at most {0} experiences")]
    TooManyExperiences(usize),
    #[error("At least one experience entry is required")]
    LastExperience,
    #[error("Select that you have experience before adding entries")]
    ExperienceDisabled,
    #[error("There is no experience entry #{}", .0 + 1)]
    NoSuchExperience(usize),
    #[error("Select a wing before choosing a department")]
    NoWingSelected,
    #[error("Only the first {kept} experiences were loaded, {dropped} more left out")]
    ExperiencesDropped { kept: usize, dropped: usize },
}

/// Employee form state.
///
/// Values are never mutated in place: [`EmployeeDraft::apply`] returns the
/// next draft. Age and experience labels are not stored; they are computed
/// from the birth date and the experience rows every time they are read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDraft {
    id: Option<i64>,
    first_name: String,
    last_name: String,
    gender: Option<Gender>,
    date_of_birth: String,
    date_of_joined: String,
    address: String,
    skills: Vec<i64>,
    wing_id: Option<i64>,
    department_id: Option<i64>,
    has_experience: Option<bool>,
    experiences: Vec<ExperienceDraft>,
    photo: Option<PhotoDataUri>,
}

impl EmployeeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an edit form from a fetched record. Records past the form's
    /// limit are left out and reported.
    pub fn from_employee(employee: &Employee) -> (Self, Vec<DraftRejected>) {
        let mut notices = Vec::new();
        if employee.experiences.len() > MAX_EXPERIENCES {
            notices.push(DraftRejected::ExperiencesDropped {
                kept: MAX_EXPERIENCES,
                dropped: employee.experiences.len() - MAX_EXPERIENCES,
            });
        }
        let experiences: Vec<ExperienceDraft> = employee
            .experiences
            .iter()
            .take(MAX_EXPERIENCES)
            .map(|e| ExperienceDraft {
                location: e.location.clone(),
                organization: e.organization.clone(),
                from_date: e.from_date.map(format_date).unwrap_or_default(),
                to_date: e.to_date.map(format_date).unwrap_or_default(),
            })
            .collect();
        let has_experience = employee.has_experience || !experiences.is_empty();

        let draft = Self {
            id: Some(employee.id),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            gender: employee.gender,
            date_of_birth: employee
                .date_of_birth
                .map(format_date)
                .unwrap_or_default(),
            date_of_joined: employee
                .date_of_joined
                .map(format_date)
                .unwrap_or_default(),
            address: employee.address.clone(),
            skills: dedup_ids(employee.skills.iter().map(|s| s.id)),
            wing_id: employee.wing.as_ref().map(|w| w.id),
            department_id: employee.department.as_ref().map(|d| d.id),
            has_experience: Some(has_experience),
            experiences: if has_experience && experiences.is_empty() {
                vec![ExperienceDraft::default()]
            } else {
                experiences
            },
            photo: employee.photo.clone(),
        };
        (draft, notices)
    }

    pub fn apply(&self, action: DraftAction) -> Result<Self, DraftRejected> {
        let mut next = self.clone();
        match action {
            DraftAction::SetFirstName(v) => next.first_name = v,
            DraftAction::SetLastName(v) => next.last_name = v,
            DraftAction::SetGender(g) => next.gender = Some(g),
            DraftAction::SetDateOfBirth(v) => next.date_of_birth = v,
            DraftAction::SetDateOfJoined(v) => next.date_of_joined = v,
            DraftAction::SetAddress(v) => next.address = v,
            DraftAction::SetSkills(ids) => next.skills = dedup_ids(ids),
            DraftAction::SelectWing(wing_id) => {
                if next.wing_id != wing_id {
                    next.wing_id = wing_id;
                    next.department_id = None;
                }
            }
            DraftAction::SelectDepartment(department_id) => {
                if department_id.is_some() && next.wing_id.is_none() {
                    return Err(DraftRejected::NoWingSelected);
                }
                next.department_id = department_id;
            }
            DraftAction::SetHasExperience(true) => {
                if next.has_experience != Some(true) {
                    next.has_experience = Some(true);
                    next.experiences = vec![ExperienceDraft::default()];
                }
            }
            DraftAction::SetHasExperience(false) => {
                next.has_experience = Some(false);
                next.experiences.clear();
            }
            DraftAction::AddExperience => {
                if next.has_experience != Some(true) {
                    return Err(DraftRejected::ExperienceDisabled);
                }
                if next.experiences.len() >= MAX_EXPERIENCES {
                    return Err(DraftRejected::TooManyExperiences(MAX_EXPERIENCES));
                }
                next.experiences.push(ExperienceDraft::default());
            }
            DraftAction::RemoveExperience(index) => {
                if index >= next.experiences.len() {
                    return Err(DraftRejected::NoSuchExperience(index));
                }
                if next.has_experience == Some(true) && next.experiences.len() == 1 {
                    return Err(DraftRejected::LastExperience);
                }
                next.experiences.remove(index);
            }
            DraftAction::EditExperience {
                index,
                field,
                value,
            } => {
                let entry = next
                    .experiences
                    .get_mut(index)
                    .ok_or(DraftRejected::NoSuchExperience(index))?;
                match field {
                    ExperienceField::Location => entry.location = value,
                    ExperienceField::Organization => entry.organization = value,
                    ExperienceField::FromDate => entry.from_date = value,
                    ExperienceField::ToDate => entry.to_date = value,
                }
            }
            DraftAction::SetPhoto(photo) => next.photo = photo,
            DraftAction::Reset => {
                next = Self {
                    id: self.id,
                    ..Self::default()
                }
            }
        }
        Ok(next)
    }

    /// Applies actions in order, skipping the rejected ones.
    pub fn apply_all<I>(&self, actions: I) -> (Self, Vec<DraftRejected>)
    where
        I: IntoIterator<Item = DraftAction>,
    {
        let mut draft = self.clone();
        let mut rejected = Vec::new();
        for action in actions {
            match draft.apply(action) {
                Ok(next) => draft = next,
                Err(reason) => {
                    tracing::debug!("form action rejected: {}", reason);
                    rejected.push(reason);
                }
            }
        }
        (draft, rejected)
    }

    /// Age on `today`, or `None` while the birth date is blank or invalid.
    pub fn age(&self, today: Date) -> Option<i32> {
        parse_date(&self.date_of_birth).map(|birth| age_on(birth, today))
    }

    pub fn experience_labels(&self) -> Vec<String> {
        self.experiences.iter().map(ExperienceDraft::label).collect()
    }

    pub fn total_experience(&self) -> Option<ExperienceSpan> {
        experience::total_span(self.experiences.iter().map(ExperienceDraft::span))
    }

    /// Aggregate label; empty when there are no experience rows.
    pub fn total_experience_label(&self) -> String {
        experience::entry_label(self.total_experience())
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn date_of_birth(&self) -> &str {
        &self.date_of_birth
    }

    pub fn date_of_joined(&self) -> &str {
        &self.date_of_joined
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn skills(&self) -> &[i64] {
        &self.skills
    }

    pub fn wing_id(&self) -> Option<i64> {
        self.wing_id
    }

    pub fn department_id(&self) -> Option<i64> {
        self.department_id
    }

    pub fn has_experience(&self) -> Option<bool> {
        self.has_experience
    }

    pub fn experiences(&self) -> &[ExperienceDraft] {
        &self.experiences
    }

    pub fn photo(&self) -> Option<&PhotoDataUri> {
        self.photo.as_ref()
    }
}

fn dedup_ids<I: IntoIterator<Item = i64>>(ids: I) -> Vec<i64> {
    let mut out: Vec<i64> = Vec::new();
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}
