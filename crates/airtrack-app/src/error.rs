use thiserror::Error;

use airtrack_engine::core::error::AirtrackError;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Core(#[from] AirtrackError),

    #[error("config error: {0}")]
    Config(String),

    #[error("unrecognized command: {0}")]
    UnknownCommand(String),

    #[error("engine lock poisoned")]
    Poisoned,
}

pub fn config_error(msg: impl ToString) -> AppError {
    AppError::Config(msg.to_string())
}
