use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("DATABASE_URL could not be parsed: {0}")]
    InvalidDatabaseUrl(#[from] url::ParseError),

    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}
