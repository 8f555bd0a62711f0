pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{stdio_prompter, LinePrompter};
pub use app::render::OutputFormat;
pub use app::session::Session;
pub use config::RosterConfig;
pub use core::store::StudentStore;
pub use domain::model::{Outcome, Student};
pub use domain::ports::Prompter;
pub use utils::error::{ErrorKind, RegistryError, Result};
