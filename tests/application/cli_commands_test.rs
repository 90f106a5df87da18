use crate::common;

use hrdesk::domain::employees::EmployeeRepository;
use hrdesk::presentation::cli::{Command, execute};
use serde_json::{Value, json};
use tempfile::NamedTempFile;
use time::macros::date;

const PNG_HEADER: [u8; 16] = [
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
];

fn form_file(form: Value) -> NamedTempFile {
    common::write_temp_file(".json", form.to_string().as_bytes())
}

fn base_form() -> Value {
    json!({
        "firstName": "Nusrat",
        "lastName": "Jahan",
        "gender": "Female",
        "dateOfBirth": "1995-02-20",
        "dateOfJoined": "2021-07-01",
        "address": "Sylhet",
        "skills": [2],
        "wing": 1,
        "department": 10,
        "hasExperience": false
    })
}

#[tokio::test]
async fn test_age_command() {
    let (state, _) = common::mock_state();

    let out = execute(
        Command::Age {
            dob: "2000-06-15".to_string(),
            today: Some("2024-06-14".to_string()),
        },
        &state,
        date!(2030 - 01 - 01),
    )
    .await
    .unwrap();

    assert_eq!(out, "23\n");
}

#[tokio::test]
async fn test_age_command_rejects_bad_date() {
    let (state, _) = common::mock_state();

    let result = execute(
        Command::Age {
            dob: "yesterday".to_string(),
            today: None,
        },
        &state,
        date!(2024 - 06 - 15),
    )
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_experience_command() {
    let (state, _) = common::mock_state();

    let out = execute(
        Command::Experience {
            ranges: vec!["2023-05-01:2022-01-01".to_string()],
        },
        &state,
        date!(2024 - 06 - 15),
    )
    .await
    .unwrap();

    assert_eq!(out, "2023-05-01:2022-01-01  \nTotal Experience: 0y 0m\n");
}

#[tokio::test]
async fn test_create_reports_field_errors() {
    let (state, employees) = common::mock_state();
    let mut form = base_form();
    form["firstName"] = json!("   ");
    form["hasExperience"] = json!(true);
    form["experiences"] = json!([
        {"location": "Dhaka", "organization": "", "fromDate": "2020-01-01", "toDate": "2019-01-01"}
    ]);

    let file = form_file(form);
    let err = execute(
        Command::Create {
            form: file.path().to_path_buf(),
            photo: None,
        },
        &state,
        date!(2024 - 06 - 15),
    )
    .await
    .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("first_name: First name is required"), "{}", message);
    assert!(message.contains("experiences[0].organization: Organization is required"));
    assert!(message.contains("experiences[0].to_date: To Date cannot be before From Date"));
    assert!(employees.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_with_photo() {
    let (state, _) = common::mock_state();
    let photo = common::write_temp_file(".png", &PNG_HEADER);

    let file = form_file(base_form());
    let out = execute(
        Command::Create {
            form: file.path().to_path_buf(),
            photo: Some(photo.path().to_path_buf()),
        },
        &state,
        date!(2024 - 06 - 15),
    )
    .await
    .unwrap();
    assert!(out.contains("Employee submitted with id 1."));

    let out = execute(Command::Show { id: 1 }, &state, date!(2024 - 06 - 15))
        .await
        .unwrap();
    assert!(out.contains("Photo: image/png data URI"));
    assert!(out.contains("Has Prior Experience: No"));
}

#[tokio::test]
async fn test_create_rejects_non_image_photo() {
    let (state, _) = common::mock_state();
    let photo = common::write_temp_file(".txt", b"just some text");

    let file = form_file(base_form());
    let result = execute(
        Command::Create {
            form: file.path().to_path_buf(),
            photo: Some(photo.path().to_path_buf()),
        },
        &state,
        date!(2024 - 06 - 15),
    )
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_create_caps_experiences_and_flags_unknown_skill() {
    let (state, _) = common::mock_state();
    let mut form = base_form();
    form["skills"] = json!([1, 9]);
    form["hasExperience"] = json!(true);
    let entry = json!({
        "location": "Khulna",
        "organization": "Acme",
        "fromDate": "2015-01-01",
        "toDate": "2016-01-01"
    });
    form["experiences"] = Value::Array(vec![entry; 6]);

    let file = form_file(form);
    let out = execute(
        Command::Create {
            form: file.path().to_path_buf(),
            photo: None,
        },
        &state,
        date!(2024 - 06 - 15),
    )
    .await
    .unwrap();

    assert!(out.contains("! You can add at most 5 experiences"));
    assert!(out.contains("! Skill 9 is not in the skills list"));
    assert!(out.contains("Total Experience: 5y 0m"));
}

#[tokio::test]
async fn test_department_outside_wing_is_cleared() {
    let (state, employees) = common::mock_state();
    let mut form = base_form();
    form["department"] = json!(20);

    let file = form_file(form);
    let err = execute(
        Command::Create {
            form: file.path().to_path_buf(),
            photo: None,
        },
        &state,
        date!(2024 - 06 - 15),
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("department: Department is required"));
    assert!(employees.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_through_cli() {
    let (state, _) = common::mock_state();
    let today = date!(2024 - 06 - 15);
    let create_form = form_file(base_form());
    execute(
        Command::Create {
            form: create_form.path().to_path_buf(),
            photo: None,
        },
        &state,
        today,
    )
    .await
    .unwrap();

    let mut form = base_form();
    form["wing"] = json!(2);
    form["department"] = json!(20);
    form["address"] = json!("Rajshahi");
    let update_form = form_file(form);
    let out = execute(
        Command::Update {
            id: 1,
            form: update_form.path().to_path_buf(),
            photo: None,
        },
        &state,
        today,
    )
    .await
    .unwrap();
    assert!(out.contains("Employee 1 updated."));

    let out = execute(Command::Show { id: 1 }, &state, today).await.unwrap();
    assert!(out.contains("First Name: Nusrat"));
    assert!(out.contains("Address: Rajshahi"));
    assert!(out.contains("Wing: Operations"));
    assert!(out.contains("Department: Payroll"));
}

#[tokio::test]
async fn test_update_missing_employee() {
    let (state, _) = common::mock_state();

    let file = form_file(base_form());
    let result = execute(
        Command::Update {
            id: 42,
            form: file.path().to_path_buf(),
            photo: None,
        },
        &state,
        date!(2024 - 06 - 15),
    )
    .await;

    assert!(result.unwrap_err().to_string().contains("Employee 42 not found"));
}

#[tokio::test]
async fn test_form_file_is_removed_after_use() {
    let (state, _) = common::mock_state();
    let file = form_file(base_form());
    let path = file.path().to_path_buf();

    execute(
        Command::Create {
            form: path.clone(),
            photo: None,
        },
        &state,
        date!(2024 - 06 - 15),
    )
    .await
    .unwrap();
    assert!(path.exists());

    drop(file);
    assert!(!path.exists());
}
