// Adapters layer: concrete implementations of the domain ports for external systems.

pub mod prompt;

pub use prompt::{stdio_prompter, LinePrompter, PromptWriter};
