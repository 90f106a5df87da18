use crate::application::form::{DraftRejected, EmployeeDraft};
use crate::domain::catalog::{Department, Skill, Wing};
use crate::shared::validation::FieldErrors;
use std::fmt::Write;
use time::Date;

/// Read-only projections of the draft: age, experience labels and total.
pub fn render_preview(draft: &EmployeeDraft, today: Date) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Age: {}",
        draft.age(today).map(|a| a.to_string()).unwrap_or_default()
    );
    for (index, (entry, label)) in draft
        .experiences()
        .iter()
        .zip(draft.experience_labels())
        .enumerate()
    {
        let _ = writeln!(
            out,
            "Experience {}: {} {} {}",
            index + 1,
            entry.organization,
            entry.location,
            label
        );
    }
    let _ = writeln!(out, "Total Experience: {}", draft.total_experience_label());
    out
}

pub fn render_notices(notices: &[DraftRejected]) -> String {
    notices.iter().map(|n| format!("! {n}\n")).collect()
}

/// Inline errors, one per offending field.
pub fn render_field_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}\n", e.field, e.message))
        .collect()
}

pub fn render_skills(skills: &[Skill]) -> String {
    render_pairs(skills.iter().map(|s| (s.id, s.name.as_str())), "No skills available.")
}

pub fn render_wings(wings: &[Wing]) -> String {
    render_pairs(wings.iter().map(|w| (w.id, w.name.as_str())), "No wings available.")
}

pub fn render_departments(departments: &[Department]) -> String {
    render_pairs(
        departments.iter().map(|d| (d.id, d.name.as_str())),
        "No departments available.",
    )
}

fn render_pairs<'a>(pairs: impl Iterator<Item = (i64, &'a str)>, empty: &str) -> String {
    let mut out = String::new();
    for (id, name) in pairs {
        let _ = writeln!(out, "{:>4}  {}", id, name);
    }
    if out.is_empty() {
        let _ = writeln!(out, "{}", empty);
    }
    out
}
