pub mod store;

pub use crate::domain::model::{Outcome, Student};
pub use crate::domain::ports::Prompter;
pub use crate::utils::error::Result;
