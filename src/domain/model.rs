use crate::utils::error::{ErrorKind, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub program: String,
    #[serde(default = "default_active")]
    pub active: bool,
    pub average: f64,
}

fn default_active() -> bool {
    true
}

impl Student {
    /// New students start out active.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        age: i32,
        program: impl Into<String>,
        average: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            program: program.into(),
            active: true,
            average,
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// Success/failure envelope handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome<T> {
    pub ok: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,
}

impl<T> Outcome<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            ok: true,
            message: message.into(),
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>, error: Option<ErrorKind>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            data: None,
            error,
        }
    }

    /// Wraps a store result; the success message is derived from the returned data.
    pub fn from_result<F>(result: Result<T>, on_success: F) -> Self
    where
        F: FnOnce(&T) -> String,
    {
        match result {
            Ok(data) => {
                let message = on_success(&data);
                Self::success(message, data)
            }
            Err(e) => Self::failure(e.to_string(), e.kind()),
        }
    }
}
