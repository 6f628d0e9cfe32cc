use crate::DbError;
use core_types::VersionRecord;
use sqlx::mysql::MySqlConnection;
use sqlx::Connection;

/// The only statement this program ever sends.
pub const SELECT_ALL_VERSIONS: &str = "\
SELECT id, version, minVersion, recommendedVersion, updateMode, \
updateMessage, updateUrl, isActive, createdAt, updatedAt \
FROM app_versions \
ORDER BY id";

/// Read-only access to the `app_versions` table over a single connection.
#[derive(Debug)]
pub struct VersionRepository {
    conn: MySqlConnection,
}

impl VersionRepository {
    /// Wraps an open connection. The repository takes ownership so the
    /// connection lives exactly as long as the fetch.
    pub fn new(conn: MySqlConnection) -> Self {
        Self { conn }
    }

    /// Fetches every row of `app_versions`, ordered by `id`, then closes the
    /// connection.
    ///
    /// The whole result set is materialized in memory. If the query fails the
    /// repository is dropped along with its connection, which releases the
    /// socket without the graceful `COM_QUIT`.
    pub async fn fetch_all_versions(mut self) -> Result<Vec<VersionRecord>, DbError> {
        let records = sqlx::query_as::<_, VersionRecord>(SELECT_ALL_VERSIONS)
            .fetch_all(&mut self.conn)
            .await
            .map_err(DbError::QueryError)?;

        tracing::info!(rows = records.len(), "Fetched app_versions.");

        self.conn.close().await.map_err(DbError::ConnectionError)?;
        Ok(records)
    }
}
