use crate::app::menu::MenuOption;
use crate::app::render::{
    render_menu, render_notice, render_outcome, render_overall_average, render_students,
    OutputFormat,
};
use crate::core::store::StudentStore;
use crate::domain::model::{Outcome, Student};
use crate::domain::ports::Prompter;
use crate::utils::error::Result;
use std::ops::ControlFlow;
use std::str::FromStr;
use tokio::io::{AsyncWrite, AsyncWriteExt};

pub const DEFAULT_TITLE: &str = "Student registry";
const NUMBER_NOTICE: &str = "Please enter a number";

/// Either a parsed answer or the flow to return to the menu loop with.
enum Step<T> {
    Value(T),
    Stop(ControlFlow<()>),
}

/// Interactive menu loop over a store.
pub struct Session<P, W> {
    store: StudentStore,
    prompter: P,
    out: W,
    format: OutputFormat,
    title: String,
}

impl<P, W> Session<P, W>
where
    P: Prompter,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(store: StudentStore, prompter: P, out: W) -> Self {
        Self {
            store,
            prompter,
            out,
            format: OutputFormat::Text,
            title: DEFAULT_TITLE.to_string(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn store(&self) -> &StudentStore {
        &self.store
    }

    pub fn into_parts(self) -> (StudentStore, P, W) {
        (self.store, self.prompter, self.out)
    }

    /// Runs until the user picks Exit or the input closes.
    pub async fn run(&mut self) -> Result<()> {
        tracing::info!("Session started with {} students", self.store.len());

        loop {
            // The menu is plain text only; in JSON mode stdout carries JSON documents alone.
            if self.format == OutputFormat::Text {
                let menu = render_menu(&self.title);
                self.write_line(&menu).await?;
            }

            let Some(answer) = self.prompter.ask("Select an option (1-8): ").await? else {
                tracing::info!("Input closed, ending session");
                break;
            };

            let option = match answer.parse::<MenuOption>() {
                Ok(option) => option,
                Err(invalid) => {
                    tracing::debug!("Invalid menu option: {:?}", invalid.0);
                    self.write_notice("Invalid option").await?;
                    continue;
                }
            };

            tracing::debug!("Menu option selected: {:?}", option);
            if self.handle(option).await?.is_break() {
                break;
            }
        }

        tracing::info!("Session ended with {} students", self.store.len());
        Ok(())
    }

    pub async fn handle(&mut self, option: MenuOption) -> Result<ControlFlow<()>> {
        match option {
            MenuOption::Add => self.add_student().await,
            MenuOption::List => {
                let students: Vec<&Student> = self.store.list().iter().collect();
                let text =
                    render_students("All students", &students, "No students registered.", self.format)?;
                self.write_line(&text).await?;
                Ok(ControlFlow::Continue(()))
            }
            MenuOption::Find => self.find_student().await,
            MenuOption::UpdateAverage => self.update_average().await,
            MenuOption::SetActive => self.change_status().await,
            MenuOption::ListActive => {
                let students = self.store.list_active();
                let text =
                    render_students("Active students", &students, "No active students.", self.format)?;
                self.write_line(&text).await?;
                Ok(ControlFlow::Continue(()))
            }
            MenuOption::OverallAverage => {
                let text = render_overall_average(self.store.average_of_averages(), self.format)?;
                self.write_line(&text).await?;
                Ok(ControlFlow::Continue(()))
            }
            MenuOption::Exit => {
                self.write_notice("Goodbye").await?;
                Ok(ControlFlow::Break(()))
            }
        }
    }

    async fn add_student(&mut self) -> Result<ControlFlow<()>> {
        let id = match self.number::<i64>("Student ID: ").await? {
            Step::Value(id) => id,
            Step::Stop(flow) => return Ok(flow),
        };
        let name = match self.text("Name: ").await? {
            Step::Value(name) => name,
            Step::Stop(flow) => return Ok(flow),
        };
        let age = match self.number::<i32>("Age: ").await? {
            Step::Value(age) => age,
            Step::Stop(flow) => return Ok(flow),
        };
        let program = match self.text("Program: ").await? {
            Step::Value(program) => program,
            Step::Stop(flow) => return Ok(flow),
        };
        let average = match self.number::<f64>("Average (0-10): ").await? {
            Step::Value(average) => average,
            Step::Stop(flow) => return Ok(flow),
        };

        let candidate = Student::new(id, name.trim(), age, program.trim(), average);
        let result = self.store.add(candidate).cloned();
        if let Err(e) = &result {
            tracing::info!("Student {} rejected: {}", id, e);
        }
        let outcome = Outcome::from_result(result, |s| format!("Student {} added", s.name));
        self.write_outcome(&outcome).await
    }

    async fn find_student(&mut self) -> Result<ControlFlow<()>> {
        let id = match self.number::<i64>("ID to search: ").await? {
            Step::Value(id) => id,
            Step::Stop(flow) => return Ok(flow),
        };
        let result = self.store.find_by_id(id).cloned();
        let outcome = Outcome::from_result(result, |_| "Student found".to_string());
        self.write_outcome(&outcome).await
    }

    async fn update_average(&mut self) -> Result<ControlFlow<()>> {
        let id = match self.number::<i64>("Student ID: ").await? {
            Step::Value(id) => id,
            Step::Stop(flow) => return Ok(flow),
        };
        let average = match self.number::<f64>("New average (0-10): ").await? {
            Step::Value(average) => average,
            Step::Stop(flow) => return Ok(flow),
        };
        let result = self.store.update_average(id, average).cloned();
        let outcome = Outcome::from_result(result, |s| {
            format!("Average for {} updated to {}", s.name, s.average)
        });
        self.write_outcome(&outcome).await
    }

    async fn change_status(&mut self) -> Result<ControlFlow<()>> {
        let id = match self.number::<i64>("Student ID: ").await? {
            Step::Value(id) => id,
            Step::Stop(flow) => return Ok(flow),
        };
        let answer = match self.text("Activate (y) or deactivate (n)? ").await? {
            Step::Value(answer) => answer,
            Step::Stop(flow) => return Ok(flow),
        };
        let active = parse_yes(&answer);
        let result = self.store.set_active(id, active).cloned();
        let outcome = Outcome::from_result(result, |s| {
            let state = if s.active { "active" } else { "inactive" };
            format!("{} is now {}", s.name, state)
        });
        self.write_outcome(&outcome).await
    }

    async fn text(&mut self, question: &str) -> Result<Step<String>> {
        match self.prompter.ask(question).await? {
            Some(answer) => Ok(Step::Value(answer)),
            None => Ok(Step::Stop(ControlFlow::Break(()))),
        }
    }

    /// Unparseable input prints a notice and returns to the menu without touching the store.
    async fn number<T: FromStr>(&mut self, question: &str) -> Result<Step<T>> {
        let answer = match self.text(question).await? {
            Step::Value(answer) => answer,
            Step::Stop(flow) => return Ok(Step::Stop(flow)),
        };
        match answer.trim().parse::<T>().ok() {
            Some(value) => Ok(Step::Value(value)),
            None => {
                tracing::debug!("Not a number: {:?}", answer);
                self.write_notice(NUMBER_NOTICE).await?;
                Ok(Step::Stop(ControlFlow::Continue(())))
            }
        }
    }

    async fn write_outcome(&mut self, outcome: &Outcome<Student>) -> Result<ControlFlow<()>> {
        let text = render_outcome(outcome, self.format)?;
        self.write_line(&text).await?;
        Ok(ControlFlow::Continue(()))
    }

    async fn write_notice(&mut self, notice: &str) -> Result<()> {
        let text = render_notice(notice, self.format)?;
        self.write_line(&text).await
    }

    async fn write_line(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        self.out.flush().await?;
        Ok(())
    }
}

fn parse_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
