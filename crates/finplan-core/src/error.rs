//! Error types for finplan

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("All values must be positive.")]
    NonPositiveInput,

    #[error("Your expenses exceed your income. Reduce expenses to proceed.")]
    ExpensesExceedIncome,

    #[error("Computation error: {0}")]
    Computation(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Render error: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
