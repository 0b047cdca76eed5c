//! Application-wide error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("required environment variable(s) not set: {}", .0.join(", "))]
    MissingConfig(Vec<&'static str>),

    #[error("environment variable '{0}' is not valid unicode")]
    NonUnicodeConfig(&'static str),

    #[error("destination directory '{}' does not exist", .0.display())]
    InvalidDestination(PathBuf),

    #[error("render error: {0}")]
    Render(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
