use crate::utils::error::Result;
use async_trait::async_trait;

/// Asks the user a question and waits for the answer.
///
/// Returns `Ok(None)` once the input is exhausted.
#[async_trait]
pub trait Prompter: Send {
    async fn ask(&mut self, question: &str) -> Result<Option<String>>;
}
