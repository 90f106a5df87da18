use super::draft::{DraftAction, DraftRejected, EmployeeDraft, ExperienceField};
use crate::domain::employees::Gender;
use serde::Deserialize;

/// Form contents supplied in one piece, e.g. from a JSON file.
///
/// Turning it into a draft replays the same actions a user would perform,
/// so every bound the form enforces applies here too.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<Gender>,
    pub date_of_birth: String,
    pub date_of_joined: String,
    pub address: String,
    pub skills: Vec<i64>,
    pub wing: Option<i64>,
    pub department: Option<i64>,
    pub has_experience: Option<bool>,
    pub experiences: Vec<ExperienceForm>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceForm {
    pub location: String,
    pub organization: String,
    pub from_date: String,
    pub to_date: String,
}

impl EmployeeForm {
    /// Fills `base` with this form. Rejected actions are returned as notices
    /// and leave the draft as it was before them.
    pub fn fill(&self, base: &EmployeeDraft) -> (EmployeeDraft, Vec<DraftRejected>) {
        let mut actions = vec![
            DraftAction::SetFirstName(self.first_name.clone()),
            DraftAction::SetLastName(self.last_name.clone()),
            DraftAction::SetDateOfBirth(self.date_of_birth.clone()),
            DraftAction::SetDateOfJoined(self.date_of_joined.clone()),
            DraftAction::SetAddress(self.address.clone()),
            DraftAction::SetSkills(self.skills.clone()),
            DraftAction::SelectWing(self.wing),
            DraftAction::SelectDepartment(self.department),
        ];
        if let Some(gender) = self.gender {
            actions.push(DraftAction::SetGender(gender));
        }
        if let Some(has_experience) = self.has_experience {
            // Toggling off first gives a clean single blank row to fill.
            actions.push(DraftAction::SetHasExperience(false));
            actions.push(DraftAction::SetHasExperience(has_experience));
        }

        let (mut draft, mut notices) = base.apply_all(actions);
        if draft.has_experience() != Some(true) {
            return (draft, notices);
        }

        for (index, entry) in self.experiences.iter().enumerate() {
            if index > 0 {
                match draft.apply(DraftAction::AddExperience) {
                    Ok(next) => draft = next,
                    Err(reason) => {
                        notices.push(reason);
                        break;
                    }
                }
            }
            let (next, rejected) = draft.apply_all(entry.edits(index));
            draft = next;
            notices.extend(rejected);
        }
        (draft, notices)
    }
}

impl ExperienceForm {
    fn edits(&self, index: usize) -> Vec<DraftAction> {
        [
            (ExperienceField::Location, &self.location),
            (ExperienceField::Organization, &self.organization),
            (ExperienceField::FromDate, &self.from_date),
            (ExperienceField::ToDate, &self.to_date),
        ]
        .into_iter()
        .map(|(field, value)| DraftAction::EditExperience {
            index,
            field,
            value: value.clone(),
        })
        .collect()
    }
}
