//! Dumps the `app_versions` table to the console and to a backup file.
//!
//! `run` is the whole program minus process concerns (CLI parsing, `.env`
//! loading, logging setup), so it can be driven from tests with an explicit
//! connection string.

use configuration::{resolve_database_url, Settings};
use database::VersionRepository;
use report::{render_report, ReportWriter};
use std::io::{self, Write};
use std::path::PathBuf;

pub mod error;

pub use error::AppError;

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No usable `mysql://` connection string; nothing was read or written.
    NotConfigured,
    /// The table was dumped to the console and the backup file.
    Completed { records: usize, backup_path: PathBuf },
}

/// Runs one backup, printing the report to stdout.
pub async fn run(database_url: &str, settings: &Settings) -> Result<RunOutcome, AppError> {
    run_with_console(database_url, settings, io::stdout()).await
}

/// Runs one backup, printing the report to `console`.
///
/// The connection is closed before anything is rendered, and the report is
/// rendered once so both sinks receive the same bytes.
pub async fn run_with_console<W: Write>(
    database_url: &str,
    settings: &Settings,
    console: W,
) -> Result<RunOutcome, AppError> {
    let Some(params) = resolve_database_url(database_url)? else {
        tracing::debug!("No mysql:// DATABASE_URL; skipping backup.");
        return Ok(RunOutcome::NotConfigured);
    };

    let conn = database::connect(&params).await?;
    let records = VersionRepository::new(conn).fetch_all_versions().await?;

    let rendered = render_report(&settings.title, &records);
    let mut writer = ReportWriter::new(console, &settings.backup_path);
    writer.emit(&rendered)?;

    tracing::debug!(path = %writer.path().display(), "Backup file saved.");
    Ok(RunOutcome::Completed {
        records: records.len(),
        backup_path: settings.backup_path.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_in(dir: &tempfile::TempDir) -> Settings {
        Settings {
            backup_path: dir.path().join("app_versions_backup.txt"),
            ..Settings::default()
        }
    }

    #[tokio::test]
    async fn missing_or_foreign_url_does_no_io() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(&dir);

        for raw in ["", "postgres://u:p@localhost:5432/appdb", "appdb"] {
            let mut console = Vec::new();
            let outcome = run_with_console(raw, &settings, &mut console).await.unwrap();

            assert_eq!(outcome, RunOutcome::NotConfigured);
            assert!(console.is_empty());
            assert!(!settings.backup_path.exists());
        }
    }

    #[tokio::test]
    async fn unparseable_url_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(&dir);

        let result = run_with_console("mysql://u:p@host:port/appdb", &settings, Vec::new()).await;

        assert!(matches!(result, Err(AppError::Config(_))));
        assert!(!settings.backup_path.exists());
    }

    #[tokio::test]
    async fn connection_failure_aborts_before_any_output() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(&dir);
        let mut console = Vec::new();

        let result =
            run_with_console("mysql://u:p@127.0.0.1:1/appdb?ssl=true", &settings, &mut console).await;

        assert!(matches!(result, Err(AppError::Database(_))));
        assert!(console.is_empty());
        assert!(!settings.backup_path.exists());
    }
}
