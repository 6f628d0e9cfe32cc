use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] configuration::error::ConfigError),
    #[error("Database error: {0}")]
    Database(#[from] database::DbError),
    #[error("Report error: {0}")]
    Report(#[from] report::ReportError),
}
