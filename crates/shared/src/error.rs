use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a piece of input text cannot be used as a target. The display string is
/// the message shown next to the input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Input is too long")]
    TooLong,
    #[error("Input is not numeric")]
    NotNumeric,
}

impl ValidationError {
    pub fn message(self) -> String {
        self.to_string()
    }
}
