use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Current user ID is not set")]
    NotAuthenticated,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown user type: {0}")]
    UnknownUserType(String),
}

pub type Result<T> = std::result::Result<T, Error>;
