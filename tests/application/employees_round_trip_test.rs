use crate::common;

use hrdesk::application::employees::create::CreateEmployeeUseCase;
use hrdesk::application::employees::get::GetEmployeeUseCase;
use hrdesk::application::form::{DraftAction, EmployeeDraft, ExperienceField};
use hrdesk::infrastructure::repositories::mock::MockEmployeeRepository;
use std::sync::Arc;
use time::macros::date;

#[tokio::test]
async fn test_fetched_record_seeds_equal_draft() {
    let repo = Arc::new(MockEmployeeRepository::default());
    let draft = common::complete_draft();

    let created = CreateEmployeeUseCase::new(repo.clone())
        .execute(&draft, date!(2024 - 06 - 15))
        .await
        .unwrap();
    let fetched = GetEmployeeUseCase::new(repo)
        .execute(created.id)
        .await
        .unwrap();

    let (reloaded, notices) = EmployeeDraft::from_employee(&fetched);
    assert!(notices.is_empty());

    assert_eq!(reloaded.id(), Some(created.id));
    assert_eq!(reloaded.first_name(), draft.first_name());
    assert_eq!(reloaded.skills(), draft.skills());
    assert_eq!(reloaded.wing_id(), draft.wing_id());
    assert_eq!(reloaded.department_id(), draft.department_id());
    assert_eq!(reloaded.experiences(), draft.experiences());
    assert_eq!(reloaded.total_experience_label(), draft.total_experience_label());
}

#[tokio::test]
async fn test_trimmed_values_are_submitted() {
    let repo = Arc::new(MockEmployeeRepository::default());
    let draft = common::complete_draft()
        .apply(DraftAction::EditExperience {
            index: 1,
            field: ExperienceField::Organization,
            value: "  Initech  ".to_string(),
        })
        .unwrap();

    let created = CreateEmployeeUseCase::new(repo)
        .execute(&draft, date!(2024 - 06 - 15))
        .await
        .unwrap();

    assert_eq!(created.experiences[1].organization, "Initech");
}
