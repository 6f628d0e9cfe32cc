use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to connect to the database: {0}")]
    ConnectionError(#[source] sqlx::Error),

    #[error("Failed to query app_versions: {0}")]
    QueryError(#[source] sqlx::Error),
}
