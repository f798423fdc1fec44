use thiserror::Error;

use crate::schema::ValidationError;

pub type Result<T> = std::result::Result<T, AccountError>;

/// Failures raised by the repository and the account service
#[derive(Error, Debug)]
pub enum AccountError {
    /// Create-time field rule violated
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Delete targeted an id that is not stored
    #[error("ID Not Found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),
}

impl From<rusqlite::Error> for AccountError {
    fn from(err: rusqlite::Error) -> Self {
        AccountError::Database(err.to_string())
    }
}
