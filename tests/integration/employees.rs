use crate::common;

use hrdesk::application::employees::create::CreateEmployeeUseCase;
use hrdesk::application::employees::get::GetEmployeeUseCase;
use hrdesk::application::employees::list::ListEmployeesUseCase;
use hrdesk::application::employees::update::UpdateEmployeeUseCase;
use hrdesk::application::form::{DraftAction, EmployeeDraft};
use hrdesk::domain::employees::EmployeeRepository;
use hrdesk::domain::photo::PhotoDataUri;
use hrdesk::shared::error::AppError;
use std::collections::BTreeSet;
use std::sync::Arc;
use time::macros::date;

#[tokio::test]
async fn test_submit_then_fetch_round_trip() {
    let base_url = common::spawn_fake_backend().await;
    let client = Arc::new(common::client_for(&base_url));
    let draft = common::complete_draft();
    let today = date!(2024 - 06 - 15);

    let created = CreateEmployeeUseCase::new(client.clone())
        .execute(&draft, today)
        .await
        .expect("Failed to create employee");

    let fetched = GetEmployeeUseCase::new(client.clone())
        .execute(created.id)
        .await
        .expect("Failed to fetch employee");

    let submitted_skills: BTreeSet<i64> = draft.skills().iter().copied().collect();
    let fetched_skills: BTreeSet<i64> = fetched.skills.iter().map(|s| s.id).collect();
    assert_eq!(fetched_skills, submitted_skills);

    assert_eq!(fetched.wing.as_ref().map(|w| w.id), draft.wing_id());
    assert_eq!(fetched.department.as_ref().map(|d| d.id), draft.department_id());
    assert_eq!(fetched.department.map(|d| d.name), Some("Mobile".to_string()));

    assert!(fetched.has_experience);
    assert_eq!(fetched.experiences.len(), draft.experiences().len());
    for (record, entry) in fetched.experiences.iter().zip(draft.experiences()) {
        assert_eq!(record.location, entry.location);
        assert_eq!(record.organization, entry.organization);
        assert_eq!(
            record.from_date.map(hrdesk::shared::dates::format_date),
            Some(entry.from_date.clone())
        );
        assert_eq!(
            record.to_date.map(hrdesk::shared::dates::format_date),
            Some(entry.to_date.clone())
        );
        assert_eq!(record.experience, entry.label());
    }
    assert_eq!(fetched.total_experience, "3y 1m");
    assert_eq!(fetched.age, Some(32));
}

#[tokio::test]
async fn test_list_employees_over_http() {
    let base_url = common::spawn_fake_backend().await;
    let client = Arc::new(common::client_for(&base_url));
    let create = CreateEmployeeUseCase::new(client.clone());

    let first = common::complete_draft();
    let second = first
        .apply(DraftAction::SetFirstName("Imran".to_string()))
        .unwrap();
    create.execute(&first, date!(2024 - 06 - 15)).await.unwrap();
    create.execute(&second, date!(2024 - 06 - 15)).await.unwrap();

    let employees = ListEmployeesUseCase::new(client).execute().await.unwrap();

    let names: Vec<String> = employees.iter().map(|e| e.full_name()).collect();
    assert_eq!(names, vec!["Farhana Chowdhury", "Imran Chowdhury"]);
}

#[tokio::test]
async fn test_update_over_http() {
    let base_url = common::spawn_fake_backend().await;
    let client = Arc::new(common::client_for(&base_url));
    let today = date!(2024 - 06 - 15);

    let created = CreateEmployeeUseCase::new(client.clone())
        .execute(&common::complete_draft(), today)
        .await
        .unwrap();

    let photo = PhotoDataUri::parse("data:image/png;base64,iVBORw0KGgo=").unwrap();
    let (base, _) = EmployeeDraft::from_employee(&created);
    let (edited, rejected) = base.apply_all([
        DraftAction::SelectWing(Some(2)),
        DraftAction::SelectDepartment(Some(20)),
        DraftAction::SetHasExperience(false),
        DraftAction::SetPhoto(Some(photo.clone())),
    ]);
    assert!(rejected.is_empty());

    let updated = UpdateEmployeeUseCase::new(client.clone())
        .execute(created.id, &edited, today)
        .await
        .unwrap();

    assert_eq!(updated.wing.map(|w| w.name), Some("Operations".to_string()));
    assert_eq!(updated.department.map(|d| d.name), Some("Payroll".to_string()));
    assert!(!updated.has_experience);
    assert!(updated.experiences.is_empty());
    assert_eq!(updated.total_experience, "");
    assert_eq!(updated.photo, Some(photo));
}

#[tokio::test]
async fn test_missing_employee_over_http() {
    let base_url = common::spawn_fake_backend().await;
    let client = Arc::new(common::client_for(&base_url));

    assert!(client.find_by_id(404).await.unwrap().is_none());

    let result = GetEmployeeUseCase::new(client.clone()).execute(404).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let result = UpdateEmployeeUseCase::new(client)
        .execute(404, &common::complete_draft(), date!(2024 - 06 - 15))
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}
