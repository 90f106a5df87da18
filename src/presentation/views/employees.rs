use crate::domain::employees::Employee;
use crate::shared::dates::format_date;
use std::fmt::Write;

/// Employees table: position, full name and id.
pub fn render_list(employees: &[Employee]) -> String {
    if employees.is_empty() {
        return "No employees found.\n".to_string();
    }

    let width = employees
        .iter()
        .map(|e| e.full_name().chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut out = String::new();
    let _ = writeln!(out, "{:>3}  {:<width$}  {}", "#", "Name", "Id");
    for (index, employee) in employees.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<width$}  {}",
            index + 1,
            employee.full_name(),
            employee.id
        );
    }
    out
}

/// Full record, in the order the details dialog shows it.
pub fn render_details(employee: &Employee) -> String {
    let mut out = String::new();
    let date = |d: Option<time::Date>| d.map(format_date).unwrap_or_default();

    let _ = writeln!(out, "Employee Details");
    let _ = writeln!(out, "First Name: {}", employee.first_name);
    let _ = writeln!(out, "Last Name: {}", employee.last_name);
    let _ = writeln!(
        out,
        "Gender: {}",
        employee.gender.map(|g| g.to_string()).unwrap_or_default()
    );
    let _ = writeln!(out, "Date of Birth: {}", date(employee.date_of_birth));
    let _ = writeln!(
        out,
        "Age: {}",
        employee.age.map(|a| a.to_string()).unwrap_or_default()
    );
    let _ = writeln!(out, "Date Joined: {}", date(employee.date_of_joined));
    let _ = writeln!(out, "Address: {}", employee.address);

    let skills = if employee.skills.is_empty() {
        "None".to_string()
    } else {
        employee
            .skills
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let _ = writeln!(out, "Skills: {}", skills);
    if let Some(wing) = &employee.wing {
        let _ = writeln!(out, "Wing: {}", wing.name);
    }
    if let Some(department) = &employee.department {
        let _ = writeln!(out, "Department: {}", department.name);
    }
    let _ = writeln!(
        out,
        "Has Prior Experience: {}",
        if employee.has_experience { "Yes" } else { "No" }
    );

    if employee.experiences.is_empty() {
        let _ = writeln!(out, "No experience records found.");
    } else {
        let _ = writeln!(out, "Experience");
        let _ = writeln!(
            out,
            "  {:>2}  {:<16} {:<20} {:<10} {:<10} {}",
            "#", "Location", "Organization", "From", "To", "Experience"
        );
        for (index, e) in employee.experiences.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {:>2}  {:<16} {:<20} {:<10} {:<10} {}",
                index + 1,
                e.location,
                e.organization,
                date(e.from_date),
                date(e.to_date),
                e.experience
            );
        }
    }

    let _ = writeln!(out, "Total Experience: {}", employee.total_experience);
    if let Some(photo) = &employee.photo {
        let _ = writeln!(out, "Photo: {} data URI", photo.mime_type());
    }
    out
}
