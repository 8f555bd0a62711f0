use crate::app::render::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "student-registry")]
#[command(about = "Interactive in-memory student registry")]
pub struct CliConfig {
    /// TOML roster to seed the registry with
    #[arg(long)]
    pub roster: Option<String>,

    /// Run the scripted walkthrough instead of the interactive menu
    #[arg(long)]
    pub demo: bool,

    /// Print outcomes and listings as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(roster) = &self.roster {
            validate_path("roster", roster)?;
        }
        Ok(())
    }
}
