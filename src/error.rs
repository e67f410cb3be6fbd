use thiserror::Error;

pub type PlannerResult<T> = core::result::Result<T, PlannerError>;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("invalid date '{input}': {source}")]
    Date {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("couldn't resolve a config directory")]
    NoConfigDir,
    #[error("{0}")]
    Invalid(String),
}

/// A form submission that was refused. The display text is the message
/// shown to the user next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0}")]
    EmptyField(&'static str),
    #[error("Please enter a valid quantity (at least 1).")]
    Quantity,
    #[error("Please enter a valid unit cost (0 or positive).")]
    UnitCost,
}
