use thiserror::Error;

/// Errors surfaced by the receipt store.
///
/// Parsing problems inside the points calculation are not errors; they
/// only reduce the score.
///
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The submitted receipt is missing required fields or is not a receipt.
    #[error("The receipt is invalid: {0}")]
    InvalidInput(String),

    /// No receipt is stored under the given id.
    #[error("No receipt found for id {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn missing_fields(fields: &[&str]) -> Self {
        Self::InvalidInput(format!("missing required fields: {}", fields.join(", ")))
    }
}
