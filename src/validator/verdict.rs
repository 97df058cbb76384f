use crate::error::ValidationError;
use serde::Serialize;
use std::fmt;

/// Outcome of validating a form: whether it may be accepted, and the text to display.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub valid: bool,
    pub message: String,
}

impl Verdict {
    pub const OK_MESSAGE: &'static str = "OK";

    pub fn ok() -> Self {
        Self {
            valid: true,
            message: Self::OK_MESSAGE.to_string(),
        }
    }

    pub fn rejected(issue: &ValidationError) -> Self {
        Self {
            valid: false,
            message: issue.to_string(),
        }
    }
}

impl From<Result<(), ValidationError>> for Verdict {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(issue) => Self::rejected(&issue),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
