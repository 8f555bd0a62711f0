use crate::app::menu::MenuOption;
use crate::domain::model::{Outcome, Student};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render_menu(title: &str) -> String {
    let mut text = format!("\n{}\n", title.to_uppercase());
    for option in MenuOption::ALL {
        text.push_str(&format!("{}\n", option));
    }
    text
}

/// Short status line such as "Invalid option"; JSON mode wraps it as `{"notice": ...}`.
pub fn render_notice(notice: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
            "notice": notice
        }))?),
        OutputFormat::Text => Ok(notice.to_string()),
    }
}

pub fn render_student(student: &Student) -> String {
    format!(
        "ID: {} | {} | Age: {} | {} | Average: {} | {}",
        student.id,
        student.name,
        student.age,
        student.program,
        student.average,
        if student.active { "Active" } else { "Inactive" }
    )
}

pub fn render_outcome(outcome: &Outcome<Student>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
        OutputFormat::Text => {
            let prefix = if outcome.ok { "OK" } else { "ERROR" };
            let mut text = format!("{} {}", prefix, outcome.message);
            if let Some(student) = &outcome.data {
                text.push('\n');
                text.push_str(&render_student(student));
            }
            Ok(text)
        }
    }
}

/// Renders a listing; `empty_notice` is shown instead of rows when there are none.
pub fn render_students(
    title: &str,
    students: &[&Student],
    empty_notice: &str,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(students)?),
        OutputFormat::Text => {
            let mut lines = vec![title.to_string()];
            if students.is_empty() {
                lines.push(empty_notice.to_string());
            } else {
                lines.extend(students.iter().map(|s| render_student(s)));
            }
            Ok(lines.join("\n"))
        }
    }
}

pub fn render_overall_average(average: f64, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
            "overall_average": average
        }))?),
        OutputFormat::Text => Ok(format!("Overall average: {:.2}", average)),
    }
}
