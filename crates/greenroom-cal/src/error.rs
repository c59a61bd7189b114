use thiserror::Error;

/// Calendar engine errors
#[derive(Error, Debug)]
pub enum CalError {
    #[error("Invalid recurrence rule: {0}")]
    InvalidRule(String),

    #[error(transparent)]
    CoreError(#[from] greenroom_core::error::CoreError),
}

pub type CalResult<T> = std::result::Result<T, CalError>;
