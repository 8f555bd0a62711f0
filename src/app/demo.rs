use crate::app::render::{render_outcome, render_overall_average, render_students, OutputFormat};
use crate::core::store::StudentStore;
use crate::domain::model::{Outcome, Student};
use crate::utils::error::Result;
use tokio::io::{AsyncWrite, AsyncWriteExt};

pub fn demo_students() -> Vec<Student> {
    vec![
        Student::new(1, "Ana", 20, "Systems", 8.5),
        Student::new(2, "Luis", 22, "Accounting", 7.8),
        Student::new(3, "María", 19, "Law", 9.2),
    ]
}

/// Walks through every store operation once against a fixed set of students.
pub async fn run_demo<W>(store: &mut StudentStore, out: &mut W, format: OutputFormat) -> Result<()>
where
    W: AsyncWrite + Unpin + Send,
{
    tracing::info!("Running demo");

    for student in demo_students() {
        let result = store.add(student).cloned();
        let outcome = Outcome::from_result(result, |s| format!("Student {} added", s.name));
        write_block(out, &render_outcome(&outcome, format)?).await?;
    }

    let all: Vec<&Student> = store.list().iter().collect();
    write_block(
        out,
        &render_students("All students", &all, "No students registered.", format)?,
    )
    .await?;

    let found = Outcome::from_result(store.find_by_id(2).cloned(), |_| {
        "Student found".to_string()
    });
    write_block(out, &render_outcome(&found, format)?).await?;

    let updated = Outcome::from_result(store.update_average(2, 8.9).cloned(), |s| {
        format!("Average for {} updated to {}", s.name, s.average)
    });
    write_block(out, &render_outcome(&updated, format)?).await?;

    let deactivated = Outcome::from_result(store.set_active(3, false).cloned(), |s| {
        format!("{} is now inactive", s.name)
    });
    write_block(out, &render_outcome(&deactivated, format)?).await?;

    let active = store.list_active();
    write_block(
        out,
        &render_students("Active students", &active, "No active students.", format)?,
    )
    .await?;

    write_block(
        out,
        &render_overall_average(store.average_of_averages(), format)?,
    )
    .await?;

    out.flush().await?;
    Ok(())
}

async fn write_block<W>(out: &mut W, text: &str) -> Result<()>
where
    W: AsyncWrite + Unpin + Send,
{
    out.write_all(text.as_bytes()).await?;
    out.write_all(b"\n").await?;
    Ok(())
}
