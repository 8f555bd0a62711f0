use anyhow::Result;
use student_registry::{LinePrompter, OutputFormat, Session, StudentStore};
use tokio::io::BufReader;

/// Feeds `input` to a stdin-like prompter and returns the store plus everything printed.
async fn run_session(input: &str, format: OutputFormat) -> Result<(StudentStore, String)> {
    run_session_bytes(input.as_bytes(), format).await
}

async fn run_session_bytes(input: &[u8], format: OutputFormat) -> Result<(StudentStore, String)> {
    let prompter = LinePrompter::new(BufReader::new(input), Vec::new());
    let mut session = Session::new(StudentStore::new(), prompter, Vec::new()).with_format(format);
    session.run().await?;

    let (store, prompter, out) = session.into_parts();
    let (_, prompts) = prompter.into_inner();
    let mut transcript = String::from_utf8(prompts)?;
    transcript.push_str(&String::from_utf8(out)?);
    Ok((store, transcript))
}

#[tokio::test]
async fn test_full_menu_walkthrough() -> Result<()> {
    let input = "\
1\n1\nAna\n20\nSystems\n8.5\n\
1\n2\nLuis\n22\nAccounting\n7.8\n\
1\n2\nDup\n30\nLaw\n5\n\
2\n\
3\n2\n\
4\n2\n8.9\n\
5\n1\nn\n\
6\n\
7\n\
8\n";
    let (store, out) = run_session(input, OutputFormat::Text).await?;

    assert_eq!(store.len(), 2);
    assert!(out.contains("OK Student Ana added"));
    assert!(out.contains("ERROR Student ID 2 already exists"));
    assert!(out.contains("ID: 2 | Luis | Age: 22 | Accounting | Average: 7.8 | Active"));
    assert!(out.contains("OK Student found"));
    assert!(out.contains("OK Average for Luis updated to 8.9"));
    assert!(out.contains("OK Ana is now inactive"));
    assert!(out.contains("Overall average: 8.70"));
    assert!(out.contains("Goodbye"));

    let active: Vec<i64> = store.list_active().iter().map(|s| s.id).collect();
    assert_eq!(active, vec![2]);
    Ok(())
}

#[tokio::test]
async fn test_prompts_are_written_to_prompter_output() -> Result<()> {
    let (_, out) = run_session("3\n9\n8\n", OutputFormat::Text).await?;
    assert!(out.contains("Select an option (1-8): "));
    assert!(out.contains("ID to search: "));
    assert!(out.contains("ERROR Student 9 not found"));
    Ok(())
}

#[tokio::test]
async fn test_range_errors_reported_without_insertion() -> Result<()> {
    let input = "1\n1\nKid\n14\nNone\n5\n1\n2\nOld\n81\nNone\n5\n1\n3\nTop\n30\nLaw\n10.1\n4\n3\n-1\n8\n";
    let (store, out) = run_session(input, OutputFormat::Text).await?;

    assert!(store.is_empty());
    assert!(out.contains("ERROR Age 14 is out of range (15-80)"));
    assert!(out.contains("ERROR Age 81 is out of range (15-80)"));
    assert!(out.contains("ERROR Average 10.1 is out of range (0-10)"));
    assert!(out.contains("ERROR Average -1 is out of range (0-10)"));
    Ok(())
}

#[tokio::test]
async fn test_end_of_input_without_exit() -> Result<()> {
    let (store, out) = run_session("1\n1\nAna\n20\nSystems\n8.5\n2\n", OutputFormat::Text).await?;
    assert_eq!(store.len(), 1);
    assert!(out.contains("ID: 1 | Ana"));
    assert!(!out.contains("Goodbye"));
    Ok(())
}

#[tokio::test]
async fn test_json_listing() -> Result<()> {
    let (_, out) = run_session("1\n1\nAna\n20\nSystems\n8.5\n6\n8\n", OutputFormat::Json).await?;
    assert!(out.contains("\"message\": \"Student Ana added\""));
    assert!(out.contains("\"program\": \"Systems\""));
    assert!(out.contains("\"active\": true"));
    Ok(())
}

#[tokio::test]
async fn test_non_utf8_name_does_not_end_session() -> Result<()> {
    let input = b"1\n1\nAn\xffa\n20\nSystems\n8.5\n2\n8\n";
    let (store, out) = run_session_bytes(input, OutputFormat::Text).await?;
    assert_eq!(store.len(), 1);
    assert_eq!(store.find_by_id(1)?.name, "An\u{FFFD}a");
    assert!(out.contains("Goodbye"));
    Ok(())
}
